pub mod config;
pub mod tokenizer;
pub mod weights;

use crate::error::Result;
use std::ffi::OsString;
use std::path::PathBuf;

/// Directory holding the exported model, expected next to the executable.
pub const MODEL_DIR_NAME: &str = "roberta_sentiment";

/// Environment variable that points at a model export elsewhere.
pub const MODEL_PATH_ENV: &str = "MODEL_PATH";

/// `MODEL_PATH` when set and non-empty, [`default_model_dir`] otherwise.
pub fn model_dir() -> Result<PathBuf> {
    model_dir_from(std::env::var_os(MODEL_PATH_ENV))
}

fn model_dir_from(override_dir: Option<OsString>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_model_dir(),
    }
}

pub fn default_model_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let base = exe.parent().map(PathBuf::from).unwrap_or_default();
    Ok(base.join(MODEL_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_sits_beside_the_executable() {
        let dir = default_model_dir().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(dir.file_name().unwrap(), MODEL_DIR_NAME);
        assert_eq!(dir.parent(), exe.parent());
    }

    #[test]
    fn model_path_overrides_default() {
        let dir = model_dir_from(Some(OsString::from("/srv/models/roberta"))).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/models/roberta"));
    }

    #[test]
    fn empty_model_path_falls_back_to_default() {
        let dir = model_dir_from(Some(OsString::new())).unwrap();
        assert_eq!(dir, default_model_dir().unwrap());
        assert_eq!(model_dir_from(None).unwrap(), default_model_dir().unwrap());
    }
}
