use std::sync::Arc;

use async_trait::async_trait;
use targum_core::{DictionaryStore, SubstitutionTranslator, TranslationRequest, TranslationResult};
use targum_translator::{ProviderMetadata, TranslateError, Translator};

/// In-process translator backed by the dictionary.
///
/// Async only to share the `Translator` seam with network providers; every
/// call completes immediately.
#[derive(Clone)]
pub struct AramaicTranslator {
    dictionary: Arc<DictionaryStore>,
    substitution: SubstitutionTranslator,
}

impl AramaicTranslator {
    pub fn new(dictionary: Arc<DictionaryStore>, fallback_phrase: impl Into<String>) -> Self {
        Self {
            dictionary,
            substitution: SubstitutionTranslator::new(fallback_phrase),
        }
    }

    pub fn dictionary(&self) -> &DictionaryStore {
        &self.dictionary
    }

    /// Synchronous entry point for callers outside a runtime
    pub fn translate_sync(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        tracing::debug!(
            "Translating {} chars ({:?})",
            request.text.chars().count(),
            request.direction
        );
        Ok(self.substitution.translate(request, self.dictionary.as_ref())?)
    }
}

#[async_trait]
impl Translator for AramaicTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        self.translate_sync(request)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "dictionary".to_string(),
            requires_network: false,
            requires_api_key: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use targum_core::{DEFAULT_FALLBACK_PHRASE, Dictionary, Direction};

    use super::*;
    use crate::loader::AramaicLoader;

    fn translator() -> AramaicTranslator {
        let dict = AramaicLoader::load_embedded().unwrap();
        AramaicTranslator::new(Arc::new(dict), DEFAULT_FALLBACK_PHRASE)
    }

    #[tokio::test]
    async fn test_every_headword_is_glossed() {
        let translator = translator();
        let entries = translator.dictionary().all_entries().to_vec();

        for entry in entries {
            let text = format!("{} ...", entry.source_term);
            let request = TranslationRequest::new(text, Direction::SourceToTarget);
            let result = translator.translate(&request).await.unwrap();

            assert!(
                result.translated_text.starts_with(&entry.target_term),
                "{} -> {}",
                entry.source_term,
                result.translated_text
            );
            if entry.source_term != entry.target_term {
                assert!(!result.translated_text.starts_with(&entry.source_term));
            }
        }
    }

    #[tokio::test]
    async fn test_prefix_with_digits_is_left_alone() {
        let request = TranslationRequest::new("אביי123", Direction::SourceToTarget);
        let result = translator().translate(&request).await.unwrap();
        assert_eq!(result.translated_text, "אביי123");
    }

    #[tokio::test]
    async fn test_reverse_finds_ilima() {
        let request = TranslationRequest::new("אם תאמר כך", Direction::TargetToSource);
        let result = translator().translate(&request).await.unwrap();
        assert!(result.reconstructed_source.contains("אילימא"));
        assert_eq!(result.translated_text, "אם תאמר כך");
    }

    #[tokio::test]
    async fn test_reverse_without_match_uses_fallback() {
        let dict = Arc::new(AramaicLoader::load_embedded().unwrap());
        let translator = AramaicTranslator::new(dict, "ברירת מחדל");
        let request = TranslationRequest::new("hello world", Direction::TargetToSource);
        let result = translator.translate(&request).await.unwrap();
        assert_eq!(result.reconstructed_source, "ברירת מחדל");
    }

    #[tokio::test]
    async fn test_blank_text_is_invalid_input() {
        let request = TranslationRequest::new("   ", Direction::SourceToTarget);
        let result = translator().translate(&request).await;
        assert!(matches!(result, Err(TranslateError::InvalidInput(_))));
    }

    #[test]
    fn test_metadata_is_offline() {
        let meta = translator().metadata();
        assert!(!meta.requires_network);
        assert_eq!(meta.name, "dictionary");
    }
}
