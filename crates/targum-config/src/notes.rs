use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_storage_key() -> String {
    "translation-notes".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NotesConfig {
    /// Explicit notes file, otherwise `<data dir>/targum/<storage_key>.json`
    pub path: Option<PathBuf>,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            path: None,
            storage_key: default_storage_key(),
        }
    }
}
