use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[trellis_derive::trellis_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader combining file-based settings with environment overrides.
///
/// Layered strategy:
/// 1. **Base file**: loads settings from a file (e.g., `trellis.toml`); defaults to `"trellis"`
///    in the current working directory when no path is given.
/// 2. **Environment overrides**: overlays values from variables prefixed with `TRELLIS__`.
///    Nested keys use double underscores (e.g., `TRELLIS__VIEW__WEBROOT` maps to `view.webroot`).
///
/// # Arguments
/// * `path`: optional path to the configuration source, without extension.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file cannot be found, the environment
/// variables are malformed, or the content does not deserialize into `T`.
///
/// # Example
/// ```rust
/// use trellis_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     webroot: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("trellis"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix("TRELLIS").separator("__").convert_case(config::Case::Snake));

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
