pub use candle_core::Device;
use candle_core::{Tensor, D};
use candle_nn::ops::softmax;
use candle_transformers::models::xlm_roberta::XLMRobertaForSequenceClassification;
use std::path::Path;
use tokenizers::Tokenizer;

use crate::error::{Error, Result};
use crate::model::config::Config;
use crate::model::tokenizer;
use crate::model::weights::WeightsFile;
use crate::sentiment::{ClassScores, Prediction};

/// A RoBERTa sequence classifier together with its tokenizer, both read
/// from a local export directory.
pub struct SentimentClassifier {
    model: XLMRobertaForSequenceClassification,
    tokenizer: Tokenizer,
    device: Device,
}

impl SentimentClassifier {
    /// Loads `config.json`, the tokenizer and the weights from `path`.
    ///
    /// Only files already on disk are read.
    pub fn load<P: AsRef<Path>>(path: P, device: Device) -> Result<Self> {
        let dir = path.as_ref();
        if !dir.exists() {
            return Err(Error::ModelNotFound(dir.to_path_buf()));
        }

        let config = Config::from_file(dir.join("config.json"))?;
        let tokenizer = tokenizer::load(dir, config.pad_token_id())?;
        let model_builder = WeightsFile::locate(dir)?.var_builder(&device)?;
        let model = XLMRobertaForSequenceClassification::new(
            config.num_labels(),
            &config.roberta_config,
            model_builder,
        )?;

        let labels: Vec<&str> = (0..config.num_labels())
            .map(|id| config.label(id).unwrap_or("?"))
            .collect();
        tracing::info!(dir = %dir.display(), ?labels, "classifier loaded");

        Ok(Self {
            model,
            tokenizer,
            device,
        })
    }

    /// Runs one forward pass and returns the softmax over the class axis.
    pub fn probabilities(&self, text: &str) -> Result<Vec<f32>> {
        let encoding = self.tokenizer.encode(text, true)?;
        tracing::debug!(tokens = encoding.len(), "encoded input");

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(encoding.get_type_ids(), &self.device)?.unsqueeze(0)?;

        let logits = self
            .model
            .forward(&input_ids, &attention_mask, &token_type_ids)?;
        let probabilities = softmax(&logits, D::Minus1)?.squeeze(0)?;
        Ok(probabilities.to_vec1::<f32>()?)
    }

    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let probabilities = self.probabilities(text)?;
        let scores = ClassScores::from_probabilities(&probabilities)?;
        tracing::debug!(
            negative = scores.negative,
            neutral = scores.neutral,
            positive = scores.positive,
            "scored input"
        );
        Ok(Prediction::from_scores(scores))
    }
}

/// CUDA device 0 when built with the `cuda` feature and a GPU is present,
/// CPU otherwise.
pub fn default_device() -> Result<Device> {
    Ok(Device::cuda_if_available(0)?)
}
