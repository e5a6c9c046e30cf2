//! Mode and environment to configuration record.

use tracing::{debug, info};

use crate::bundle::{BuildOptions, PluginOptions, VisualizerOptions};
use crate::config::{BuildConfig, EsbuildOptions, OptimizeDepsOptions};
use crate::dev::DevServerOptions;
use crate::env::ResolveEnv;
use crate::mode::BuildMode;

/// Resolve the configuration for a build.
///
/// Pure and infallible: the only input-dependent part is the plugin list,
/// which gains the bundle analyzer for production builds with `ANALYZE` set.
///
/// # Example
///
/// ```
/// use keel_config::{resolve, BuildMode, ResolveEnv};
///
/// let dev = resolve(&BuildMode::Development, &ResolveEnv::new(true));
/// assert_eq!(dev.plugins.len(), 1);
///
/// let analyzed = resolve(&BuildMode::Production, &ResolveEnv::new(true));
/// assert_eq!(analyzed.plugins.len(), 2);
/// ```
pub fn resolve(mode: &BuildMode, env: &ResolveEnv) -> BuildConfig {
    debug!(%mode, analyze = env.analyze, "resolving build configuration");

    BuildConfig {
        plugins: plugins_for(mode, env),
        optimize_deps: OptimizeDepsOptions::default(),
        server: DevServerOptions::default(),
        build: BuildOptions::default(),
        esbuild: EsbuildOptions::default(),
    }
}

/// Resolve with `ANALYZE` taken from the process environment.
pub fn resolve_from_env(mode: &BuildMode) -> BuildConfig {
    resolve(mode, &ResolveEnv::from_process())
}

fn plugins_for(mode: &BuildMode, env: &ResolveEnv) -> Vec<PluginOptions> {
    let base = vec![PluginOptions::React];

    if !(mode.is_production() && env.analyze) {
        return base;
    }

    let analyzer = VisualizerOptions::default();
    info!(report = %analyzer.filename, "bundle analyzer enabled");
    base.into_iter()
        .chain(std::iter::once(PluginOptions::Visualizer(analyzer)))
        .collect()
}
