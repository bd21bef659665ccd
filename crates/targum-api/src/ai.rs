use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use targum_config::ai::AiConfig;

/// Text generation service client
#[derive(Clone)]
pub struct AiClient {
    service_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    client: reqwest::Client,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    pub analysis: String,
    pub structure: TextStructure,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStructure {
    pub phrases: Vec<String>,
    pub grammar: String,
    #[serde(rename = "contextualMeaning")]
    pub contextual_meaning: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    generated_text: Option<String>,
    #[serde(default)]
    structure: Option<TextStructure>,
}

impl AiClient {
    pub fn from_config(config: &AiConfig, timeout: Duration) -> Self {
        Self {
            service_url: config.service_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client: crate::http_client(timeout),
        }
    }

    /// Translation fallback when the backend returns nothing; empty on failure
    pub async fn generate_translation(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> String {
        let prompt = format!(
            "Translate the following {source_language} text to {target_language}, maintaining the original meaning and style: \"{text}\""
        );

        match self.generate(&prompt).await {
            Ok(response) => response.generated_text.unwrap_or_default(),
            Err(e) => {
                tracing::error!("AI service error: {e:#}");
                String::new()
            }
        }
    }

    /// Free-form prompt; empty on failure
    pub async fn process_request(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(response) => response.generated_text.unwrap_or_default(),
            Err(e) => {
                tracing::error!("AI service error: {e:#}");
                String::new()
            }
        }
    }

    /// Break an Aramaic passage into phrases and grammar notes; empty on failure
    pub async fn analyze_structure(&self, aramaic_text: &str) -> StructureAnalysis {
        let prompt = format!(
            "Analyze the structure and components of this Aramaic text: \"{aramaic_text}\". Identify key phrases, grammatical elements, and provide a breakdown of its meaning."
        );

        match self.generate(&prompt).await {
            Ok(response) => StructureAnalysis {
                analysis: response.generated_text.unwrap_or_default(),
                structure: response.structure.unwrap_or_default(),
            },
            Err(e) => {
                tracing::error!("AI analysis service error: {e:#}");
                StructureAnalysis::default()
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<GenerateResponse> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.service_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AI service")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("AI service returned HTTP {status}");
        }

        response
            .json::<GenerateResponse>()
            .await
            .context("Failed to parse AI service response")
    }
}
