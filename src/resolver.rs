use std::collections::HashMap;

use envconfig::Envconfig;
use tracing::debug;

use crate::cfg::WebhookConfig;
use crate::error::Result;
use crate::field::Field;
use crate::source::ConfigSource;

/// Per-call replacement of a field's default lookup key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    keys: HashMap<Field, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, key: impl Into<String>) -> Self {
        self.insert(field, key);
        self
    }

    pub fn insert(&mut self, field: Field, key: impl Into<String>) {
        self.keys.insert(field, key.into());
    }

    /// Builds overrides from `(field name, key)` pairs, e.g. `("deDupeTable", "MyTable")`.
    pub fn from_names<I, N, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, K)>,
        N: AsRef<str>,
        K: Into<String>,
    {
        let mut overrides = Self::new();
        for (name, key) in pairs {
            overrides.insert(name.as_ref().parse()?, key);
        }
        Ok(overrides)
    }

    /// Key `field` is read from: the override if any, the default otherwise.
    pub fn key_for(&self, field: Field) -> &str {
        self.keys
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.default_key())
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Resolves [`WebhookConfig`] from a [`ConfigSource`].
///
/// Missing settings are left absent, never rejected. The only error is a
/// source that fails to answer.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    overrides: Overrides,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: Overrides) -> Self {
        Self { overrides }
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn resolve<S: ConfigSource + ?Sized>(&self, source: &S) -> Result<WebhookConfig> {
        resolve_with(source, &self.overrides)
    }
}

/// Resolves from an in-memory map. Never fails for a missing value.
pub fn resolve(
    source: &HashMap<String, String>,
    overrides: Option<&Overrides>,
) -> Result<WebhookConfig> {
    match overrides {
        Some(overrides) => resolve_with(source, overrides),
        None => resolve_with(source, &Overrides::default()),
    }
}

fn resolve_with<S: ConfigSource + ?Sized>(source: &S, overrides: &Overrides) -> Result<WebhookConfig> {
    // Values are re-keyed under the default keys the envconfig derive reads.
    let mut settings = HashMap::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let key = overrides.key_for(field);
        let value = source.lookup(key)?;
        debug!(field = field.name(), key, found = value.is_some(), "resolve webhook setting");
        if let Some(value) = value {
            settings.insert(field.default_key().to_string(), value);
        }
    }
    Ok(WebhookConfig::init_from_hashmap(&settings)?)
}
