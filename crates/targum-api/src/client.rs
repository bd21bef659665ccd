use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use targum_config::api::ApiConfig;

/// Backend server client (health, translate, OCR, AI assist, documents)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    auth_token: String,
    client: reqwest::Client,
}

/// Translation as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteTranslation {
    pub aramaic: String,
    pub translation: String,
}

impl RemoteTranslation {
    pub fn is_empty(&self) -> bool {
        self.aramaic.is_empty() && self.translation.is_empty()
    }
}

#[derive(Deserialize)]
struct OcrResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct AiAssistResponse {
    result: Option<String>,
}

#[derive(Deserialize)]
struct DocumentResponse {
    #[serde(rename = "extractedText")]
    extracted_text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest<'a> {
    text: &'a str,
    source_language: &'a str,
    target_language: &'a str,
}

impl ApiClient {
    pub fn new(base_url: String, auth_token: String, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
            client: crate::http_client(timeout),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.auth_token.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// `true` only when `/health` answers 200
    pub async fn check_connection(&self) -> bool {
        match self.client.get(self.url("health")).send().await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                tracing::error!("Server connection error: {e}");
                false
            }
        }
    }

    /// Translate through the backend; empty on failure
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> RemoteTranslation {
        let body = TranslateRequest {
            text,
            source_language,
            target_language,
        };

        self.post::<_, RemoteTranslation>("translate", &body)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Translation API error: {e:#}");
                RemoteTranslation::default()
            })
    }

    /// Extract text from a base64-encoded image; empty on failure
    pub async fn extract_text_from_image(&self, image_base64: &str) -> String {
        match self
            .post::<_, OcrResponse>("ocr", &json!({ "image": image_base64 }))
            .await
        {
            Ok(response) => response.text.unwrap_or_default(),
            Err(e) => {
                tracing::error!("OCR API error: {e:#}");
                String::new()
            }
        }
    }

    /// Ask the backend assistant; empty on failure
    pub async fn ask_ai_assistant(&self, text: &str, prompt: Option<&str>) -> String {
        match self
            .post::<_, AiAssistResponse>("ai-assist", &json!({ "text": text, "prompt": prompt }))
            .await
        {
            Ok(response) => response.result.unwrap_or_default(),
            Err(e) => {
                tracing::error!("AI API error: {e:#}");
                String::new()
            }
        }
    }

    /// Extract text from a remote PDF/Word document; empty on failure
    pub async fn process_document(&self, file_url: &str) -> String {
        match self
            .post::<_, DocumentResponse>("process-document", &json!({ "fileUrl": file_url }))
            .await
        {
            Ok(response) => response.extracted_text.unwrap_or_default(),
            Err(e) => {
                tracing::error!("Document processing API error: {e:#}");
                String::new()
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.auth_token)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send request to /{path}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("/{path} returned HTTP {status}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse /{path} response"))
    }
}
