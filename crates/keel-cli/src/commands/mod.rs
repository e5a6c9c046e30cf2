//! Command implementations for the keel CLI.
//!
//! Each command lives in its own module and exposes an `execute` function
//! taking the parsed arguments.

pub mod check;
pub mod inspect;
pub mod resolve;

pub use check::execute as check_execute;
pub use inspect::{asset_name_execute, sanitize_execute};
pub use resolve::execute as resolve_execute;
