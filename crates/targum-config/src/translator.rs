use serde::{Deserialize, Serialize};
use targum_core::DEFAULT_FALLBACK_PHRASE;

fn default_fallback_phrase() -> String {
    DEFAULT_FALLBACK_PHRASE.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Reconstruction returned when a reverse lookup finds nothing
    #[serde(default = "default_fallback_phrase")]
    pub fallback_phrase: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            fallback_phrase: default_fallback_phrase(),
        }
    }
}
