use thiserror::Error;

/// Result type for extractor operations
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Errors that can occur while turning source text into declarations
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Failed to parse the source code
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to load the grammar into the parser
    #[error("Language error: {0}")]
    LanguageError(String),
}

impl ExtractorError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a language error
    pub fn language(msg: impl Into<String>) -> Self {
        Self::LanguageError(msg.into())
    }
}
