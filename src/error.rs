use std::path::PathBuf;
use thiserror::Error;

/// Every failure of a prediction run.
///
/// The `Display` text is what callers see in the `error` field of the
/// failure JSON, so the two user-facing variants keep their exact wording.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Model directory not found: {}", .0.display())]
    ModelNotFound(PathBuf),

    #[error("No input text provided")]
    MissingInput,

    #[error(
        "no model weights in {}: expected model.safetensors or pytorch_model.bin",
        .0.display()
    )]
    MissingWeights(PathBuf),

    #[error("invalid model output: {0}")]
    InvalidOutput(String),

    #[error("argument error: {0}")]
    Usage(String),

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("candle error: {0}")]
    Candle(#[from] candle_core::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tokenizers::Error> for Error {
    fn from(err: tokenizers::Error) -> Self {
        Self::Tokenizer(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
