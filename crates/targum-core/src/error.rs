#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid dictionary entry: {0}")]
    InvalidEntry(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
