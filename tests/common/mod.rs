use candle_core::{DType, Device};
use candle_nn::{VarBuilder, VarMap};
use candle_transformers::models::xlm_roberta::XLMRobertaForSequenceClassification;
use roberta_sentiment::model::config::Config;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Writes a two-layer RoBERTa classifier with random weights, a byte-level
/// vocabulary and a `config.json` shaped like a Hugging Face export.
pub fn write_tiny_model(dir: &Path) {
    let config = json!({
        "architectures": ["RobertaForSequenceClassification"],
        "attention_probs_dropout_prob": 0.1,
        "bos_token_id": 0,
        "classifier_dropout": null,
        "eos_token_id": 2,
        "hidden_act": "gelu",
        "hidden_dropout_prob": 0.1,
        "hidden_size": 16,
        "id2label": {"0": "negative", "1": "neutral", "2": "positive"},
        "initializer_range": 0.02,
        "intermediate_size": 32,
        "label2id": {"negative": 0, "neutral": 1, "positive": 2},
        "layer_norm_eps": 1e-05,
        "max_position_embeddings": 600,
        "model_type": "roberta",
        "num_attention_heads": 2,
        "num_hidden_layers": 2,
        "pad_token_id": 1,
        "position_embedding_type": "absolute",
        "type_vocab_size": 1,
        "use_cache": true,
        "vocab_size": 64
    });
    fs::write(dir.join("config.json"), config.to_string()).unwrap();

    let vocab = json!({
        "<s>": 0, "<pad>": 1, "</s>": 2, "<unk>": 3,
        "I": 4, "!": 5, "Ġ": 6, "l": 7, "o": 8, "v": 9, "e": 10,
        "t": 11, "h": 12, "i": 13, "s": 14, "a": 15,
    });
    fs::write(dir.join("vocab.json"), vocab.to_string()).unwrap();
    fs::write(dir.join("merges.txt"), "#version: 0.2\n").unwrap();

    let config = Config::from_value(config).unwrap();
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
    XLMRobertaForSequenceClassification::new(config.num_labels(), &config.roberta_config, vb)
        .unwrap();
    varmap.save(dir.join("model.safetensors")).unwrap();
}
