pub mod cfg;
pub mod error;
pub mod field;
pub mod report;
pub mod resolver;
pub mod source;

pub use cfg::{WebhookConfig, WebhookConfigShared};
pub use error::ConfigError;
pub use field::Field;
pub use resolver::{resolve, ConfigResolver, Overrides};
pub use source::{ConfigSource, EnvSource};
