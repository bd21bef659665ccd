use std::sync::Arc;
use std::time::Duration;

use targum_api::{AiClient, ApiClient, RemoteTranslator};
use targum_config::Config;
use targum_core::DictionaryStore;
use targum_lang_aramaic::{AramaicLoader, AramaicTranslator};
use targum_types::{Labels, Language};

pub struct AppState {
    pub config: Config,
    pub dictionary: Arc<DictionaryStore>,
    pub translator: AramaicTranslator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dictionary = Arc::new(AramaicLoader::with_additional(
            config.dictionary.enabled,
            &config.dictionary.additional_paths,
        ));
        let translator = AramaicTranslator::new(
            Arc::clone(&dictionary),
            config.translator.fallback_phrase.clone(),
        );

        Self {
            config,
            dictionary,
            translator,
        }
    }

    pub fn language(&self) -> Language {
        self.config.ui.language
    }

    pub fn labels(&self) -> &'static Labels {
        Labels::for_language(self.language())
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::from_config(&self.config.api)
    }

    pub fn ai_client(&self) -> AiClient {
        AiClient::from_config(
            &self.config.ai,
            Duration::from_secs(self.config.api.timeout_seconds),
        )
    }

    pub fn remote_translator(&self) -> RemoteTranslator {
        RemoteTranslator::new(self.api_client(), Some(self.ai_client()))
    }
}
