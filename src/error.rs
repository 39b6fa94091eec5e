use thiserror::Error;

/// Errors raised while resolving webhook settings.
///
/// A missing setting is never an error during resolution. `MissingSetting`
/// only comes from [`crate::cfg::WebhookConfig::require`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration source unavailable while reading {key}: {reason}")]
    SourceUnavailable { key: String, reason: String },
    #[error("setting {field} is not configured (default key {key})")]
    MissingSetting { field: &'static str, key: &'static str },
    #[error("unknown webhook config field: {name}")]
    UnknownField { name: String },
    #[error("populate config")]
    Envconfig(#[from] envconfig::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
