use thiserror::Error;

pub type Result<T> = std::result::Result<T, MirrorError>;

#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Extractor error: {0}")]
    ExtractorError(#[from] finegrain_extractor::ExtractorError),

    #[error("Invalid source root: {0}")]
    InvalidPath(String),
}
