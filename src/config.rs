/// Host-supplied settings for the generator page
use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_COUNTER: u32 = 1;
pub const DEFAULT_COPY_FEEDBACK_MS: u32 = 2000;
pub const DEFAULT_TIME_LOCALE: &str = "ar-EG";

/// Every field is optional when deserializing; missing ones fall back
/// to the defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Counter value on load and after a reset
    pub initial_counter: u32,
    /// How long an entry shows as "copied"
    pub copy_feedback_ms: u32,
    /// Locale passed to `toLocaleTimeString` for history timestamps
    pub time_locale: String,
}

impl GeneratorConfig {
    /// Counter start, never below 1
    pub fn start_counter(&self) -> u32 {
        self.initial_counter.max(1)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            initial_counter: DEFAULT_INITIAL_COUNTER,
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            time_locale: DEFAULT_TIME_LOCALE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.start_counter(), 1);
        assert_eq!(config.copy_feedback_ms, 2000);
        assert_eq!(config.time_locale, "ar-EG");
    }

    #[test]
    fn test_partial_override() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"copyFeedbackMs": 500, "timeLocale": "en-US"}"#).unwrap();

        assert_eq!(config.copy_feedback_ms, 500);
        assert_eq!(config.time_locale, "en-US");
        assert_eq!(config.initial_counter, 1);
    }

    #[test]
    fn test_start_counter_is_clamped() {
        let config = GeneratorConfig {
            initial_counter: 0,
            ..GeneratorConfig::default()
        };

        assert_eq!(config.start_counter(), 1);
    }
}
