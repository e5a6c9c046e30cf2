//! keel CLI entry point: argument parsing, logging initialization, and
//! command dispatch.

use clap::Parser;
use keel_cli::{cli, commands, error, logger};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    logger::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::AssetName(asset_args) => commands::asset_name_execute(asset_args),
        cli::Command::Sanitize(sanitize_args) => commands::sanitize_execute(sanitize_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
