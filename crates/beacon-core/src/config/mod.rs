//! Engine configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod channels;
pub mod dispatch;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::channels::{EmailChannelConfig, SmsChannelConfig};
use self::dispatch::DispatchConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root engine configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Dispatch fan-out settings.
    #[serde(default)]
    pub dispatch: DispatchConfig,
    /// SMS channel settings.
    #[serde(default)]
    pub sms: SmsChannelConfig,
    /// Email channel settings.
    #[serde(default)]
    pub email: EmailChannelConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `BEACON`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BEACON")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_usable() {
        let config = EngineConfig::default();
        assert!(config.dispatch.concurrency > 0);
        assert!(config.dispatch.send_timeout_seconds > 0);
        assert!(config.email.enabled);
    }
}
