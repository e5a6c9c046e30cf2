//! Build configuration for a Vite/Rollup-style front-end bundler.
//!
//! The crate turns a [`BuildMode`] and a [`ResolveEnv`] into a typed
//! [`BuildConfig`] record (plugins, dev-server proxy rules and production
//! output shaping) that is serialized for an external bundler to consume.

pub mod bundle;
pub mod config;
pub mod dev;
pub mod env;
pub mod error;
pub mod mode;
pub mod resolver;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use config::*;
pub use dev::*;
pub use env::{is_truthy, ResolveEnv, ANALYZE_VAR};
pub use error::*;
pub use mode::BuildMode;
pub use resolver::{resolve, resolve_from_env};

pub use validation::{validate, ConfigValidator, SchemaValidator};
