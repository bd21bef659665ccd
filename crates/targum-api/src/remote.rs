use async_trait::async_trait;
use targum_core::{Direction, TranslationRequest, TranslationResult};
use targum_translator::{ProviderMetadata, TranslateError, Translator};

use crate::ai::AiClient;
use crate::client::ApiClient;

const SOURCE_LANGUAGE: &str = "aramaic";
const TARGET_LANGUAGE: &str = "hebrew";

/// Backend translation with an optional AI fallback
pub struct RemoteTranslator {
    api: ApiClient,
    ai: Option<AiClient>,
}

impl RemoteTranslator {
    pub fn new(api: ApiClient, ai: Option<AiClient>) -> Self {
        Self { api, ai }
    }

    async fn ai_fallback(&self, text: &str, from: &str, to: &str) -> String {
        match &self.ai {
            Some(ai) => {
                tracing::info!("Backend translation empty, asking AI service");
                ai.generate_translation(text, from, to).await
            }
            None => String::new(),
        }
    }
}

#[async_trait]
impl Translator for RemoteTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        if request.text.trim().is_empty() {
            return Err(TranslateError::InvalidInput("empty text".to_string()));
        }

        let (from, to) = match request.direction {
            Direction::SourceToTarget => (SOURCE_LANGUAGE, TARGET_LANGUAGE),
            Direction::TargetToSource => (TARGET_LANGUAGE, SOURCE_LANGUAGE),
        };

        let remote = self.api.translate(&request.text, from, to).await;

        match request.direction {
            Direction::SourceToTarget => {
                let mut translated = remote.translation;
                if translated.is_empty() {
                    translated = self.ai_fallback(&request.text, from, to).await;
                }
                if translated.is_empty() {
                    return Err(TranslateError::ServiceUnavailable(
                        "translation service returned no text".to_string(),
                    ));
                }

                let reconstructed = if remote.aramaic.is_empty() {
                    request.text.clone()
                } else {
                    remote.aramaic
                };

                Ok(TranslationResult {
                    reconstructed_source: reconstructed,
                    translated_text: translated,
                })
            }
            Direction::TargetToSource => {
                let mut reconstructed = remote.aramaic;
                if reconstructed.is_empty() {
                    reconstructed = self.ai_fallback(&request.text, from, to).await;
                }
                if reconstructed.is_empty() {
                    return Err(TranslateError::ServiceUnavailable(
                        "translation service returned no text".to_string(),
                    ));
                }

                Ok(TranslationResult {
                    reconstructed_source: reconstructed,
                    translated_text: request.text.clone(),
                })
            }
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "remote".to_string(),
            requires_network: true,
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use targum_config::ai::AiConfig;

    use super::*;
    use crate::test_server::{serve_once, unreachable_url};

    fn api(url: String) -> ApiClient {
        ApiClient::new(url, "token".to_string(), Duration::from_secs(5))
    }

    fn ai(url: String) -> AiClient {
        let config = AiConfig {
            service_url: url,
            ..AiConfig::default()
        };
        AiClient::from_config(&config, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_backend_translation() {
        let (url, server) =
            serve_once(200, r#"{"aramaic": "הכא", "translation": "כאן"}"#).await;
        let translator = RemoteTranslator::new(api(url), None);

        let request = TranslationRequest::new("הכא", Direction::SourceToTarget);
        let result = translator.translate(&request).await.unwrap();
        assert_eq!(result.translated_text, "כאן");
        assert_eq!(result.reconstructed_source, "הכא");

        let raw = server.await.unwrap();
        assert!(raw.contains(r#""sourceLanguage":"aramaic""#));
    }

    #[tokio::test]
    async fn test_reverse_uses_aramaic_field() {
        let (url, server) =
            serve_once(200, r#"{"aramaic": "התם", "translation": "שם"}"#).await;
        let translator = RemoteTranslator::new(api(url), None);

        let request = TranslationRequest::new("שם", Direction::TargetToSource);
        let result = translator.translate(&request).await.unwrap();
        assert_eq!(result.reconstructed_source, "התם");
        assert_eq!(result.translated_text, "שם");

        let raw = server.await.unwrap();
        assert!(raw.contains(r#""sourceLanguage":"hebrew""#));
    }

    #[tokio::test]
    async fn test_falls_back_to_ai() {
        let (ai_url, ai_server) = serve_once(200, r#"{"generated_text": "כיצד זה"}"#).await;
        let translator = RemoteTranslator::new(api(unreachable_url().await), Some(ai(ai_url)));

        let request = TranslationRequest::new("היכי דמי", Direction::SourceToTarget);
        let result = translator.translate(&request).await.unwrap();
        assert_eq!(result.translated_text, "כיצד זה");
        assert_eq!(result.reconstructed_source, "היכי דמי");
        ai_server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unavailable_when_everything_fails() {
        let translator = RemoteTranslator::new(
            api(unreachable_url().await),
            Some(ai(unreachable_url().await)),
        );

        let request = TranslationRequest::new("היכי דמי", Direction::SourceToTarget);
        let result = translator.translate(&request).await;
        assert!(matches!(result, Err(TranslateError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_blank_text_skips_network() {
        let translator = RemoteTranslator::new(api(unreachable_url().await), None);
        let request = TranslationRequest::new(" ", Direction::TargetToSource);
        let result = translator.translate(&request).await;
        assert!(matches!(result, Err(TranslateError::InvalidInput(_))));
    }
}
