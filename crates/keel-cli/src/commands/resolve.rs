//! `keel resolve`: emit the resolved configuration.

use std::fs;
use std::io::Write;

use keel_config::{resolve, BuildConfig};
use tracing::{debug, info};

use crate::cli::{OutputFormat, ResolveArgs};
use crate::error::{CliError, Result};
use crate::settings::ResolveSettings;

pub fn execute(args: ResolveArgs) -> Result<()> {
    let settings = ResolveSettings::load(args.mode.as_deref(), args.analyze)?;
    let mode = settings.mode();
    let env = settings.env();

    let config = resolve(&mode, &env);
    let rendered = render(&config, args.format)?;
    debug!(
        format = args.format.extension(),
        bytes = rendered.len(),
        "rendered configuration"
    );

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            info!(%mode, path = %path.display(), "wrote build configuration");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

pub fn render(config: &BuildConfig, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => config.to_json_pretty()?,
        OutputFormat::Toml => config.to_toml_string()?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_config::{BuildMode, ResolveEnv};

    #[test]
    fn renders_json() {
        let config = resolve(&BuildMode::Production, &ResolveEnv::new(true));
        let json = render(&config, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["plugins"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn renders_toml() {
        let config = resolve(&BuildMode::Development, &ResolveEnv::default());
        let toml = render(&config, OutputFormat::Toml).unwrap();
        assert!(toml.contains("@vitejs/plugin-react"));
        assert!(!toml.contains("rollup-plugin-visualizer"));
    }
}
