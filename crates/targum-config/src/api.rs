use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://your-api-server.com/api".to_string()
}

fn default_auth_token() -> String {
    "AUTH_TOKEN_PLACEHOLDER".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Backend server used for health, translation, OCR and AI assist
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_auth_token")]
    pub auth_token: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_token: default_auth_token(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
