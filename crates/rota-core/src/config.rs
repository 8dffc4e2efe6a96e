use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{DEFAULT_MAX_OCCURRENCES, MAX_CANDIDATE_STEPS, MIN_REST_HOURS};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scheduling: SchedulingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchedulingConfig {
    /// Shifts closer together than this raise a rest-period warning.
    pub min_rest_hours: u32,
    /// Occurrence limit for rules without `COUNT`.
    pub default_max_occurrences: u32,
    /// Hard ceiling on candidate dates examined per generation.
    pub max_candidate_steps: u32,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            min_rest_hours: MIN_REST_HOURS,
            default_max_occurrences: DEFAULT_MAX_OCCURRENCES,
            max_candidate_steps: MAX_CANDIDATE_STEPS,
        }
    }
}

impl SchedulingConfig {
    /// ## Summary
    /// Checks that every scheduling bound is positive.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` naming the first zero-valued field.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("scheduling.min_rest_hours", self.min_rest_hours),
            (
                "scheduling.default_max_occurrences",
                self.default_max_occurrences,
            ),
            ("scheduling.max_candidate_steps", self.max_candidate_steps),
        ];

        if let Some((name, _)) = fields.iter().find(|(_, value)| *value == 0) {
            return Err(CoreError::InvalidInput(format!("{name} must be at least 1")));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with the built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be registered.
    pub fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("scheduling.min_rest_hours", i64::from(MIN_REST_HOURS))?
            .set_default(
                "scheduling.default_max_occurrences",
                i64::from(DEFAULT_MAX_OCCURRENCES),
            )?
            .set_default(
                "scheduling.max_candidate_steps",
                i64::from(MAX_CANDIDATE_STEPS),
            )?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Deserializes and validates settings from a prepared builder.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating fails.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> CoreResult<Self> {
        let settings = builder.build()?.try_deserialize::<Self>()?;
        settings.scheduling.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Loads configuration from defaults, `ROTA_*` environment variables and an
    /// optional `rota.toml`. The TOML file takes precedence over the environment.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(
                config::Environment::with_prefix("ROTA")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("rota").required(false));

        Ok(Self::from_builder(builder)?)
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
