use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::ai::AiConfig;
use self::api::ApiConfig;
use self::dictionary::DictionaryConfig;
use self::notes::NotesConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod ai;
pub mod api;
pub mod dictionary;
pub mod notes;
pub mod translator;
pub mod ui;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub api: ApiConfig,
    pub ai: AiConfig,
    pub dictionary: DictionaryConfig,
    pub notes: NotesConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults overridden by `TARGUM_*` environment variables
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Load a JSON config file; missing sections fall back to defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_vars(|key| env::var(key).ok());
    }

    /// Apply `TARGUM_*` overrides from `get`. Blank phrases and unknown
    /// languages are ignored.
    pub fn apply_vars(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(url) = get("TARGUM_API_URL") {
            self.api.base_url = url;
        }
        if let Some(token) = get("TARGUM_AUTH_TOKEN") {
            self.api.auth_token = token;
        }
        if let Some(value) = get("TARGUM_TIMEOUT_SECONDS") {
            match value.trim().parse() {
                Ok(secs) => self.api.timeout_seconds = secs,
                Err(e) => tracing::warn!("Ignoring TARGUM_TIMEOUT_SECONDS: {e}"),
            }
        }
        if let Some(url) = get("TARGUM_AI_URL") {
            self.ai.service_url = url;
        }
        if let Some(key) = get("TARGUM_AI_KEY") {
            self.ai.api_key = key;
        }
        if let Some(phrase) = get("TARGUM_FALLBACK_PHRASE") {
            if !phrase.trim().is_empty() {
                self.translator.fallback_phrase = phrase;
            }
        }
        if let Some(lang) = get("TARGUM_LANGUAGE") {
            match lang.parse() {
                Ok(language) => self.ui.language = language,
                Err(e) => tracing::warn!("Ignoring TARGUM_LANGUAGE: {e}"),
            }
        }
    }
}
