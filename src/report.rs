use serde::Serialize;

use crate::cfg::WebhookConfig;
use crate::field::Field;

/// Which settings a resolved config carries, by key. Never holds values.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PresenceReport {
    pub present: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

impl PresenceReport {
    pub fn new(config: &WebhookConfig) -> Self {
        let (present, missing): (Vec<Field>, Vec<Field>) = Field::ALL
            .into_iter()
            .partition(|f| config.get(*f).is_some());
        Self {
            present: present.into_iter().map(Field::default_key).collect(),
            missing: missing.into_iter().map(Field::default_key).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::resolver::resolve;

    #[test]
    fn lists_keys_without_values() {
        let src = HashMap::from([
            ("TitoWebhookSecret".to_string(), "abc123".to_string()),
            ("TitoWebhookDeDupeTable".to_string(), "DedupeTbl".to_string()),
        ]);
        let report = PresenceReport::new(&resolve(&src, None).unwrap());

        assert_eq!(report.present, vec!["TitoWebhookSecret", "TitoWebhookDeDupeTable"]);
        assert_eq!(report.missing.len(), 4);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"present\":[\"TitoWebhookSecret\""));
        assert!(!json.contains("abc123"));
    }
}
