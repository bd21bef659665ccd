use targum_core::{CoreError, TranslationRequest, TranslationResult};

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate in the direction carried by the request
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_network: bool,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for TranslateError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => TranslateError::InvalidInput(msg),
            other => TranslateError::Core(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_lifted() {
        let err: TranslateError = CoreError::InvalidInput("empty text".to_string()).into();
        assert!(matches!(err, TranslateError::InvalidInput(ref m) if m == "empty text"));
    }

    #[test]
    fn test_other_core_errors_are_wrapped() {
        let err: TranslateError = CoreError::InvalidEntry("entry 0".to_string()).into();
        assert!(matches!(err, TranslateError::Core(_)));
        assert_eq!(err.to_string(), "Invalid dictionary entry: entry 0");
    }
}
