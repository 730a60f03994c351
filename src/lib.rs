//! Binary sentiment scoring with a locally exported RoBERTa classifier.
//!
//! The model scores negative, neutral and positive; [`sentiment::Prediction`]
//! folds that into positive or negative with a confidence percentage. The
//! `predict` binary wraps [`cli::run`] and prints the result as one JSON line.

pub mod classifier;
pub mod cli;
pub mod error;
pub mod model;
pub mod output;
pub mod sentiment;

pub use classifier::SentimentClassifier;
pub use error::{Error, Result};
pub use sentiment::{Prediction, Sentiment};
