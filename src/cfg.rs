use std::fmt;
use std::sync::Arc;

use envconfig::Envconfig;

use crate::error::{ConfigError, Result};
use crate::field::Field;
use crate::resolver::ConfigResolver;
use crate::source::EnvSource;

pub type WebhookConfigShared = Arc<WebhookConfig>;

/// Settings of the Tito webhook integration.
/// The connection string, table and queue names are provisioned by the
/// deployment template, not by CI variables.
///
/// Every field is optional. Whether a missing setting is fatal is up to the
/// code that uses it, see [`WebhookConfig::require`].
#[derive(Envconfig, Clone, Default, PartialEq, Eq)]
pub struct WebhookConfig {
    #[envconfig(from = "TitoWebhookSecret")]
    pub(crate) secret: Option<String>,
    #[envconfig(from = "TitoWebhookConnectionString")]
    pub(crate) connection_string: Option<String>,
    #[envconfig(from = "TitoWebhookDeDupeTable")]
    pub(crate) de_dupe_table: Option<String>,
    #[envconfig(from = "TitoWebhookOrderNotificationQueue")]
    pub(crate) order_notification_queue: Option<String>,
    #[envconfig(from = "TitoWebhookTicketNotificationQueue")]
    pub(crate) ticket_notification_queue: Option<String>,
    #[envconfig(from = "TitoApiBearerToken")]
    pub(crate) api_bearer_token: Option<String>,
}

impl WebhookConfig {
    /// Reads all settings from the process environment under their default keys.
    pub fn from_env() -> Result<Self> {
        ConfigResolver::new().resolve(&EnvSource)
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    pub fn connection_string(&self) -> Option<&str> {
        self.connection_string.as_deref()
    }

    pub fn de_dupe_table(&self) -> Option<&str> {
        self.de_dupe_table.as_deref()
    }

    pub fn order_notification_queue(&self) -> Option<&str> {
        self.order_notification_queue.as_deref()
    }

    pub fn ticket_notification_queue(&self) -> Option<&str> {
        self.ticket_notification_queue.as_deref()
    }

    pub fn api_bearer_token(&self) -> Option<&str> {
        self.api_bearer_token.as_deref()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Secret => self.secret(),
            Field::ConnectionString => self.connection_string(),
            Field::DeDupeTable => self.de_dupe_table(),
            Field::OrderNotificationQueue => self.order_notification_queue(),
            Field::TicketNotificationQueue => self.ticket_notification_queue(),
            Field::ApiBearerToken => self.api_bearer_token(),
        }
    }

    /// Returns the value of a setting the caller cannot work without.
    pub fn require(&self, field: Field) -> Result<&str> {
        self.get(field).ok_or(ConfigError::MissingSetting {
            field: field.name(),
            key: field.default_key(),
        })
    }

    pub fn present_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }

    fn redacted(&self, field: Field) -> Option<&str> {
        match self.get(field) {
            Some(_) if field.is_sensitive() => Some("<redacted>"),
            value => value,
        }
    }
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("WebhookConfig");
        for field in Field::ALL {
            s.field(field.name(), &self.redacted(field));
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn full() -> WebhookConfig {
        let settings: HashMap<String, String> = Field::ALL
            .iter()
            .map(|f| (f.default_key().to_string(), format!("{}-value", f.name())))
            .collect();
        WebhookConfig::init_from_hashmap(&settings).unwrap()
    }

    #[test]
    fn envconfig_keys_match_declared_defaults() {
        let config = full();
        for field in Field::ALL {
            assert_eq!(config.get(field), Some(format!("{}-value", field.name()).as_str()));
        }
    }

    #[test]
    fn envconfig_leaves_missing_keys_absent() {
        let config = WebhookConfig::init_from_hashmap(&HashMap::new()).unwrap();
        assert_eq!(config, WebhookConfig::default());
        assert!(config.present_fields().is_empty());
    }

    #[test]
    fn require_reports_field_and_key() {
        let config = WebhookConfig {
            secret: Some("abc123".to_string()),
            ..Default::default()
        };
        assert_eq!(config.require(Field::Secret).unwrap(), "abc123");

        let err = config.require(Field::ConnectionString).unwrap_err();
        match err {
            ConfigError::MissingSetting { field, key } => {
                assert_eq!(field, "connection_string");
                assert_eq!(key, "TitoWebhookConnectionString");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn debug_hides_credentials() {
        let rendered = format!("{:?}", full());
        assert!(!rendered.contains("secret-value"));
        assert!(!rendered.contains("connection_string-value"));
        assert!(!rendered.contains("api_bearer_token-value"));
        assert!(rendered.contains("de_dupe_table-value"));
        assert!(rendered.contains("order_notification_queue-value"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn debug_shows_absent_credentials_as_none() {
        let rendered = format!("{:?}", WebhookConfig::default());
        assert!(!rendered.contains("<redacted>"));
        assert!(rendered.contains("secret: None"));
    }

    #[test]
    fn present_fields_in_declaration_order() {
        let config = WebhookConfig {
            api_bearer_token: Some("t".to_string()),
            de_dupe_table: Some("DedupeTbl".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.present_fields(),
            vec![Field::DeDupeTable, Field::ApiBearerToken]
        );
    }
}
