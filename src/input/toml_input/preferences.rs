use serde::{Deserialize, Serialize};

use crate::hours::{StatusPolicy, StatusTexts};

/// Operator preferences, loaded from an optional toml file.
///
/// ```toml
/// policy = "backend-first"
///
/// [texts]
/// closed_fallback = "temporarily closed"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    policy: StatusPolicy,
    texts: StatusTexts,
}

impl Preferences {
    #[must_use]
    pub const fn policy(&self) -> StatusPolicy {
        self.policy
    }

    #[must_use]
    pub fn texts(&self) -> &StatusTexts {
        &self.texts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_everything_is_optional() {
        let preferences: Preferences = toml::from_str("").unwrap();

        assert_eq!(preferences.policy(), StatusPolicy::LocalFirst);
        assert_eq!(preferences.texts(), &StatusTexts::default());
    }

    #[test]
    fn test_backend_first() {
        let preferences: Preferences = toml::from_str("policy = \"backend-first\"\n").unwrap();

        assert_eq!(preferences.policy(), StatusPolicy::BackendFirst);
    }

    #[test]
    fn test_custom_texts() {
        let preferences: Preferences = toml::from_str(concat!(
            //
            "[texts]\n",
            "closed_fallback = \"temporarily closed\"\n",
        ))
        .unwrap();

        assert_eq!(preferences.texts().closed_fallback(), "temporarily closed");
        // the other texts keep their defaults
        assert_eq!(preferences.texts().open_all_day(), "Open all day");
        assert_eq!(preferences.texts().unknown(), "Hours unknown");
    }
}
