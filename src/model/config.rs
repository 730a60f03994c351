use crate::error::Result;
use crate::sentiment::NUM_CLASSES;
use candle_transformers::models::xlm_roberta::Config as RobertaConfig;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub roberta_config: RobertaConfig,
    #[serde(flatten)]
    pub classifier_config: ClassifierConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub id2label: HashMap<String, String>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path.as_ref())?;
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    pub fn from_value(mut value: Value) -> Result<Self> {
        fill_defaults(&mut value);
        Ok(serde_json::from_value(value)?)
    }

    pub fn num_labels(&self) -> usize {
        match self.classifier_config.id2label.len() {
            0 => NUM_CLASSES,
            n => n,
        }
    }

    pub fn pad_token_id(&self) -> u32 {
        self.roberta_config.pad_token_id
    }

    pub fn label(&self, id: usize) -> Option<&str> {
        self.classifier_config
            .id2label
            .get(&id.to_string())
            .map(String::as_str)
    }
}

// Older RoBERTa exports predate this key.
fn fill_defaults(value: &mut Value) {
    if let Some(fields) = value.as_object_mut() {
        fields
            .entry("position_embedding_type")
            .or_insert_with(|| Value::String("absolute".to_owned()));
    }
}
