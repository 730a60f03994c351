use crate::classifier::{default_device, SentimentClassifier};
use crate::error::{Error, Result};
use crate::model::model_dir;
use crate::sentiment::Prediction;
use clap::Parser;
use std::ffi::OsString;
use std::iter;
use tracing_subscriber::{fmt, EnvFilter};

/// Score the sentiment of a text with a local RoBERTa classifier
///
/// Every argument is text, even one that looks like a flag, so the caller
/// always gets a JSON line back. The model location comes from
/// `MODEL_PATH` and log verbosity from `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(name = "predict", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Text to classify. Only the first value is used.
    #[arg(value_name = "TEXT", num_args = 0..)]
    text: Vec<String>,
}

impl Cli {
    /// Parses `args` (program name first) with option parsing switched off.
    pub fn try_parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("predict"));
        // A leading `--` makes clap treat everything after it as positional.
        Self::try_parse_from(iter::once(bin).chain(iter::once("--".into())).chain(args))
    }

    pub fn input(&self) -> Result<&str> {
        self.text
            .first()
            .map(String::as_str)
            .ok_or(Error::MissingInput)
    }
}

/// `RUST_LOG` when set, errors only otherwise.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
}

/// Stdout is reserved for the result line, so logs go to stderr.
pub fn init_logging(filter: EnvFilter) {
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Reduces a clap parse failure to its one-line message.
pub fn usage_error(err: &clap::Error) -> Error {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    Error::Usage(line.trim_start_matches("error: ").to_owned())
}

/// Validates the input, loads the classifier and scores the text.
pub fn run(cli: &Cli) -> Result<Prediction> {
    let text = cli.input()?;
    let model_dir = model_dir()?;
    tracing::info!(model_dir = %model_dir.display(), chars = text.chars().count(), "starting prediction");

    let classifier = SentimentClassifier::load(&model_dir, default_device()?)?;
    classifier.predict(text)
}
