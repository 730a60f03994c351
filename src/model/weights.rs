use crate::error::{Error, Result};
use candle_core::{DType, Device};
use candle_nn::VarBuilder;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightsFile {
    SafeTensors(PathBuf),
    PyTorch(PathBuf),
}

impl WeightsFile {
    /// Finds the checkpoint in `dir`, preferring safetensors.
    pub fn locate(dir: &Path) -> Result<Self> {
        let safetensors = dir.join("model.safetensors");
        if safetensors.is_file() {
            return Ok(Self::SafeTensors(safetensors));
        }
        let pytorch = dir.join("pytorch_model.bin");
        if pytorch.is_file() {
            return Ok(Self::PyTorch(pytorch));
        }
        Err(Error::MissingWeights(dir.to_path_buf()))
    }

    pub fn var_builder(&self, device: &Device) -> Result<VarBuilder<'static>> {
        let vb = match self {
            Self::SafeTensors(path) => {
                tracing::debug!(path = %path.display(), "mapping safetensors weights");
                unsafe { VarBuilder::from_mmaped_safetensors(&[path], DType::F32, device) }?
            }
            Self::PyTorch(path) => {
                tracing::debug!(path = %path.display(), "loading pytorch weights");
                VarBuilder::from_pth(path, DType::F32, device)?
            }
        };
        Ok(vb)
    }
}
