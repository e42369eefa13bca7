#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`TracedArray`].
///
/// [`TracedArray`]: crate::TracedArray
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    verbose: bool,
}

impl Config {
    /// Creates a config that also records a snapshot for every plain read.
    #[must_use]
    pub fn verbose() -> Self {
        Self { verbose: true }
    }

    /// Returns a copy of this config with verbosity set to `verbose`.
    #[must_use]
    pub fn with_verbose(self, verbose: bool) -> Self {
        Self { verbose }
    }

    /// Returns whether plain reads are recorded.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet() {
        assert!(!Config::default().is_verbose());
        assert!(Config::verbose().is_verbose());
        assert!(!Config::verbose().with_verbose(false).is_verbose());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{"verbose": true}"#).unwrap();
        assert_eq!(config, Config::verbose());
    }
}
