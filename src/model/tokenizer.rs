use crate::error::{Error, Result};
use std::path::Path;
use tokenizers::models::bpe::BPE;
use tokenizers::pre_tokenizers::byte_level::ByteLevel;
use tokenizers::processors::roberta::RobertaProcessing;
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

/// Longest encoding fed to the model, special tokens included.
pub const MAX_LENGTH: usize = 512;

const BOS_TOKEN: &str = "<s>";
const EOS_TOKEN: &str = "</s>";
const UNK_TOKEN: &str = "<unk>";
const PAD_TOKEN: &str = "<pad>";

/// Loads the tokenizer shipped next to the model.
///
/// `tokenizer.json` wins when present; otherwise the byte-level BPE is
/// rebuilt from `vocab.json` and `merges.txt`. Truncation and padding are
/// always replaced so long inputs are cut at [`MAX_LENGTH`] tokens.
pub fn load<P: AsRef<Path>>(dir: P, pad_id: u32) -> Result<Tokenizer> {
    let dir = dir.as_ref();
    let tokenizer_file = dir.join("tokenizer.json");
    let mut tokenizer = if tokenizer_file.is_file() {
        tracing::debug!(path = %tokenizer_file.display(), "loading tokenizer");
        Tokenizer::from_file(&tokenizer_file)?
    } else {
        tracing::debug!(dir = %dir.display(), "building tokenizer from vocab.json and merges.txt");
        from_vocab_and_merges(dir)?
    };

    let pad_token = tokenizer
        .id_to_token(pad_id)
        .unwrap_or_else(|| PAD_TOKEN.to_owned());
    tokenizer
        .with_padding(Some(PaddingParams {
            strategy: PaddingStrategy::BatchLongest,
            pad_id,
            pad_token,
            ..Default::default()
        }))
        .with_truncation(Some(TruncationParams {
            max_length: MAX_LENGTH,
            ..Default::default()
        }))?;
    Ok(tokenizer)
}

fn from_vocab_and_merges(dir: &Path) -> Result<Tokenizer> {
    let vocab = dir.join("vocab.json");
    let merges = dir.join("merges.txt");
    let bpe = BPE::from_file(&vocab.to_string_lossy(), &merges.to_string_lossy())
        .unk_token(UNK_TOKEN.to_owned())
        .build()?;

    let mut tokenizer = Tokenizer::new(bpe);
    let bos_id = special_token_id(&tokenizer, BOS_TOKEN)?;
    let eos_id = special_token_id(&tokenizer, EOS_TOKEN)?;
    tokenizer
        .with_pre_tokenizer(Some(ByteLevel::default().add_prefix_space(false)))
        .with_post_processor(Some(
            RobertaProcessing::new((EOS_TOKEN.to_owned(), eos_id), (BOS_TOKEN.to_owned(), bos_id))
                .trim_offsets(true)
                .add_prefix_space(false),
        ))
        .with_decoder(Some(ByteLevel::default()));
    Ok(tokenizer)
}

fn special_token_id(tokenizer: &Tokenizer, token: &str) -> Result<u32> {
    tokenizer
        .token_to_id(token)
        .ok_or_else(|| Error::Tokenizer(format!("special token {token} missing from vocab.json")))
}
