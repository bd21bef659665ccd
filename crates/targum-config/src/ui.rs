use serde::{Deserialize, Serialize};
use targum_types::Language;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub language: Language,
}
