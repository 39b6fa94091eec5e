use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};

use crate::error::{ConfigError, Result};

/// Where setting values come from.
///
/// `Ok(None)` means the key is not set. `Err` is reserved for a source that
/// cannot be read at all.
pub trait ConfigSource {
    fn lookup(&self, key: &str) -> Result<Option<String>>;
}

impl ConfigSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        (**self).lookup(key)
    }
}

/// Process environment, the way application settings reach the function host.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e @ VarError::NotUnicode(_)) => Err(ConfigError::SourceUnavailable {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
