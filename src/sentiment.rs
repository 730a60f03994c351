use crate::error::{Error, Result};
use serde::Serialize;

/// Number of classes the model is expected to score.
pub const NUM_CLASSES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

/// Softmax probabilities in the model's class order: negative, neutral, positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
}

impl ClassScores {
    pub fn from_probabilities(probabilities: &[f32]) -> Result<Self> {
        match probabilities {
            &[negative, neutral, positive] => Ok(Self {
                negative: negative.into(),
                neutral: neutral.into(),
                positive: positive.into(),
            }),
            other => Err(Error::InvalidOutput(format!(
                "expected {NUM_CLASSES} class scores, got {}",
                other.len()
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Prediction {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

impl Prediction {
    /// Collapses the three-way scores into a positive/negative label.
    ///
    /// Neutral never wins: only the positive and negative probabilities are
    /// compared, and an exact tie goes to negative.
    pub fn from_scores(scores: ClassScores) -> Self {
        let (sentiment, probability) = if scores.positive > scores.negative {
            (Sentiment::Positive, scores.positive)
        } else {
            (Sentiment::Negative, scores.negative)
        };
        Self {
            sentiment,
            confidence: round2(probability * 100.0),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
