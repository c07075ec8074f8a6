//! Local MiniLM embedder configuration.

use std::path::{Path, PathBuf};

use crate::embedding::error::EmbeddingError;

/// Output dimensionality of the MiniLM sentence-embedding family.
pub const MINILM_EMBEDDING_DIM: usize = 384;

/// Maximum token count fed to the model; longer inputs are truncated.
pub const MINILM_MAX_SEQ_LEN: usize = 256;

/// Configuration for [`MiniLmEmbedder`](super::MiniLmEmbedder).
///
/// Points at a model directory holding `config.json`, `model.safetensors`,
/// and `tokenizer.json`. Use [`MiniLmConfig::stub`] for tests and model-less
/// startup.
#[derive(Debug, Clone)]
pub struct MiniLmConfig {
    /// Directory containing the model files.
    pub model_dir: PathBuf,

    /// Embedding output dimension. Default: [`MINILM_EMBEDDING_DIM`].
    pub embedding_dim: usize,

    /// Maximum input sequence length in tokens. Default: [`MINILM_MAX_SEQ_LEN`].
    pub max_seq_len: usize,

    /// Run with a deterministic hash-seeded backend instead of a real model.
    pub testing_stub: bool,
}

impl Default for MiniLmConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            embedding_dim: MINILM_EMBEDDING_DIM,
            max_seq_len: MINILM_MAX_SEQ_LEN,
            testing_stub: false,
        }
    }
}

impl MiniLmConfig {
    /// Creates a config pointing at a model directory.
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Self::default()
        }
    }

    /// Creates a stub config (no model files required).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Self::default()
        }
    }

    /// Checks basic invariants before any file access.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be non-zero".to_string(),
            });
        }

        if !self.testing_stub && self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir must be set unless running in stub mode".to_string(),
            });
        }

        Ok(())
    }

    /// Path to the model's `config.json`.
    pub fn config_path(&self) -> PathBuf {
        self.model_dir.join("config.json")
    }

    /// Path to the model's `model.safetensors`.
    pub fn weights_path(&self) -> PathBuf {
        self.model_dir.join("model.safetensors")
    }

    /// Path to the model's `tokenizer.json`.
    pub fn tokenizer_path(&self) -> PathBuf {
        self.model_dir.join("tokenizer.json")
    }

    /// Returns `true` when all required model files exist on disk.
    pub fn model_available(&self) -> bool {
        file_exists(&self.config_path())
            && file_exists(&self.weights_path())
            && file_exists(&self.tokenizer_path())
    }
}

fn file_exists(path: &Path) -> bool {
    path.is_file()
}
