//! `keel check`: validate resolved configurations.

use console::style;
use keel_config::{resolve, validate, BuildMode, ResolveEnv};
use tracing::{error, info};

use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crate::settings::ResolveSettings;

/// Mode/analyzer combinations checked when no mode is given.
fn default_targets() -> Vec<(BuildMode, ResolveEnv)> {
    vec![
        (BuildMode::Development, ResolveEnv::new(false)),
        (BuildMode::Production, ResolveEnv::new(false)),
        (BuildMode::Production, ResolveEnv::new(true)),
    ]
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let targets = match args.mode.as_deref() {
        Some(mode) => {
            let settings = ResolveSettings::load(Some(mode), args.analyze)?;
            vec![(settings.mode(), settings.env())]
        }
        None => default_targets(),
    };

    let checked = targets.len();
    let mut failed = 0;

    for (mode, env) in targets {
        let label = if env.analyze {
            format!("{mode} (analyze)")
        } else {
            mode.to_string()
        };

        match validate(&resolve(&mode, &env)) {
            Ok(()) => {
                info!(mode = %label, "configuration valid");
                println!("{} {}", style("✔").green().bold(), label);
            }
            Err(err) => {
                failed += 1;
                error!(mode = %label, %err, "configuration invalid");
                println!("{} {}: {}", style("✘").red().bold(), label, err);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::CheckFailed { failed, checked });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_cover_analyzer() {
        let targets = default_targets();
        assert_eq!(targets.len(), 3);
        assert!(targets
            .iter()
            .any(|(mode, env)| mode.is_production() && env.analyze));
    }

    #[test]
    fn every_default_target_validates() {
        for (mode, env) in default_targets() {
            assert!(validate(&resolve(&mode, &env)).is_ok(), "{mode}");
        }
    }
}
