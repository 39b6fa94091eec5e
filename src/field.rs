use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Declared webhook settings and the application setting each one is read
/// from unless an override says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Secret,
    ConnectionString,
    DeDupeTable,
    OrderNotificationQueue,
    TicketNotificationQueue,
    ApiBearerToken,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Secret,
        Field::ConnectionString,
        Field::DeDupeTable,
        Field::OrderNotificationQueue,
        Field::TicketNotificationQueue,
        Field::ApiBearerToken,
    ];

    /// Must stay in sync with the `envconfig(from = ..)` attributes on
    /// `WebhookConfig`.
    pub fn default_key(self) -> &'static str {
        match self {
            Field::Secret => "TitoWebhookSecret",
            Field::ConnectionString => "TitoWebhookConnectionString",
            Field::DeDupeTable => "TitoWebhookDeDupeTable",
            Field::OrderNotificationQueue => "TitoWebhookOrderNotificationQueue",
            Field::TicketNotificationQueue => "TitoWebhookTicketNotificationQueue",
            Field::ApiBearerToken => "TitoApiBearerToken",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Secret => "secret",
            Field::ConnectionString => "connection_string",
            Field::DeDupeTable => "de_dupe_table",
            Field::OrderNotificationQueue => "order_notification_queue",
            Field::TicketNotificationQueue => "ticket_notification_queue",
            Field::ApiBearerToken => "api_bearer_token",
        }
    }

    fn camel_name(self) -> &'static str {
        match self {
            Field::Secret => "secret",
            Field::ConnectionString => "connectionString",
            Field::DeDupeTable => "deDupeTable",
            Field::OrderNotificationQueue => "orderNotificationQueue",
            Field::TicketNotificationQueue => "ticketNotificationQueue",
            Field::ApiBearerToken => "apiBearerToken",
        }
    }

    /// Credentials that must never end up in logs.
    pub fn is_sensitive(self) -> bool {
        matches!(
            self,
            Field::Secret | Field::ConnectionString | Field::ApiBearerToken
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s || f.camel_name() == s)
            .ok_or_else(|| ConfigError::UnknownField { name: s.to_string() })
    }
}
