use crate::error::Result;
use crate::sentiment::Prediction;
use serde::Serialize;
use std::io::Write;

/// The single JSON line printed by the `predict` binary.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Success(Prediction),
    Failure {
        error: String,
        sentiment: &'static str,
        confidence: u8,
    },
}

impl Outcome {
    pub fn failure(error: impl ToString) -> Self {
        Self::Failure {
            error: error.to_string(),
            sentiment: "neutral",
            confidence: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Writes the outcome as one line of JSON and flushes.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl From<Result<Prediction>> for Outcome {
    fn from(result: Result<Prediction>) -> Self {
        match result {
            Ok(prediction) => Self::Success(prediction),
            Err(err) => Self::failure(err),
        }
    }
}
