// src/config/ratpoly_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Top-level settings for the `ratpoly` binary and the factorizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatpolyConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    pub factor: FactorConfig,

    pub display: DisplayConfig,
}

/// Knobs for rational factoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorConfig {
    /// Stop early when Eisenstein's criterion proves the integerized
    /// polynomial irreducible.
    pub eisenstein_fast_path: bool,
}

/// How the CLI prints polynomials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Variable name used in rendered output
    pub variable: String,

    /// Three-row fraction layout instead of a single line
    pub stacked: bool,

    /// Emit JSON instead of text
    pub json: bool,
}

impl Default for RatpolyConfig {
    fn default() -> Self {
        RatpolyConfig {
            log_level: "info".to_string(),
            factor: FactorConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for FactorConfig {
    fn default() -> Self {
        FactorConfig { eisenstein_fast_path: true }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            variable: "x".to_string(),
            stacked: false,
            json: false,
        }
    }
}

impl RatpolyConfig {
    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("ratpoly.toml").exists() {
            builder = builder.add_source(File::with_name("ratpoly.toml"));
        } else if Path::new("ratpoly.yaml").exists() {
            builder = builder.add_source(File::with_name("ratpoly.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("factor.eisenstein_fast_path", true)?
            .set_default("display.variable", "x")?
            .set_default("display.stacked", false)?
            .set_default("display.json", false)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // RATPOLY_LOG_LEVEL, RATPOLY_FACTOR__EISENSTEIN_FAST_PATH, ...
        let config = builder
            .add_source(
                Environment::with_prefix("RATPOLY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
