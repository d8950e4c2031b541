use anyhow::Result;
use config::{Config, FileFormat};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_FLOAT_PRECISION, DEFAULT_QUOTE_MAX_ITERATIONS, ENV_PREFIX,
    ENV_QUOTE_MAX_ITERATIONS, ENV_SEPARATOR,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub codec: CodecConfig,
}

/// Tunables for value printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Maximum characters visited while quoting one TEXT value. Input past
    /// this point is dropped from the output.
    pub quote_max_iterations: usize,
    /// Digits after the decimal point when printing FLOAT values.
    pub float_precision: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            quote_max_iterations: DEFAULT_QUOTE_MAX_ITERATIONS,
            float_precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}

impl CodecConfig {
    /// ## Summary
    /// Rejects settings that would make the printer emit nothing useful.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if the quoting ceiling is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.quote_max_iterations == 0 {
            return Err(CoreError::ValidationError(format!(
                "quote_max_iterations must be positive (see {ENV_QUOTE_MAX_ITERATIONS})"
            )));
        }
        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `CALVALUE__*` environment variables
    /// and an optional `calvalue.toml` in the working directory.
    /// Environment variables take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE_NAME)
    }

    /// ## Summary
    /// Like [`Settings::load`], reading the optional TOML file at `path`.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load_from(path: &str) -> Result<Self> {
        let defaults = CodecConfig::default();
        let settings = Config::builder()
            .set_default(
                "codec.quote_max_iterations",
                i64::try_from(defaults.quote_max_iterations)?,
            )?
            .set_default(
                "codec.float_precision",
                i64::try_from(defaults.float_precision)?,
            )?
            // TOML file
            .add_source(config::File::new(path, FileFormat::Toml).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.codec.validate()?;
        tracing::debug!(path, codec = ?settings.codec, "Codec configuration loaded");

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
