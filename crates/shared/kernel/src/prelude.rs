//! Ergonomic re-exports for downstream crates.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use crate::safe_nanoid;
pub use crate::security::escape::escape_html;
