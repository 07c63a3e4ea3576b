//! Sentence embeddings from a BERT-family model (e.g. all-MiniLM-L6-v2) via candle.

use std::path::Path;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use super::Embedder;
use super::config::EmbedderConfig;
use super::device::select_device;
use super::error::EmbeddingError;
use super::utils::{l2_normalize, load_tokenizer};

/// Mean-pooled, L2-normalized BERT sentence embedder.
pub struct BertEmbedder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    hidden_size: usize,
    config: EmbedderConfig,
}

impl std::fmt::Debug for BertEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BertEmbedder")
            .field("device", &format!("{:?}", self.device))
            .field("hidden_size", &self.hidden_size)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl BertEmbedder {
    /// Loads model weights, config and tokenizer from `config.model_dir`.
    pub fn load(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let model_dir = config
            .model_dir
            .clone()
            .ok_or_else(|| EmbeddingError::InvalidConfig {
                reason: "BertEmbedder requires a model directory".to_string(),
            })?;

        let device = select_device()?;
        debug!(?device, "Selected compute device for embeddings");

        let model_config = read_model_config(&model_dir.join("config.json"))?;
        let weights_path = model_dir.join("model.safetensors");

        // SAFETY: the weights file is memory-mapped read-only and must not be modified while
        // the model is alive.
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)
        }
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!("failed to map weights: {}", e),
        })?;

        let model = load_bert(vb, &model_config)?;
        let tokenizer = load_tokenizer(&model_dir.join("tokenizer.json"), config.max_seq_len)?;

        info!(
            model_dir = %model_dir.display(),
            hidden_size = model_config.hidden_size,
            max_seq_len = config.max_seq_len,
            "Embedding model loaded"
        );

        Ok(Self {
            model,
            tokenizer,
            device,
            hidden_size: model_config.hidden_size,
            config,
        })
    }

    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }

    fn forward_mean_pooled(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            self.tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let ids = encoding.get_ids();
        if ids.is_empty() {
            return Err(EmbeddingError::TokenizationFailed {
                reason: "tokenizer produced no tokens".to_string(),
            });
        }

        debug!(
            text_len = text.len(),
            token_count = ids.len(),
            "Generating embedding (transformer forward pass)"
        );

        // [1, seq_len]
        let input_ids = Tensor::new(ids, &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        // [1, seq_len, hidden_size]
        let hidden_states =
            self.model
                .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;

        // Mean pooling over unmasked tokens.
        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden_states.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?;
        let pooled = summed.broadcast_div(&counts)?;

        let mut embedding = pooled.squeeze(0)?.to_vec1::<f32>()?;
        l2_normalize(&mut embedding);
        Ok(embedding)
    }
}

impl Embedder for BertEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.forward_mean_pooled(text)
    }

    fn embedding_dim(&self) -> usize {
        self.hidden_size
    }
}

fn read_model_config(path: &Path) -> Result<Config, EmbeddingError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| EmbeddingError::ModelLoadFailed {
        reason: format!("failed to parse {}: {}", path.display(), e),
    })
}

fn load_bert(vb: VarBuilder, config: &Config) -> Result<BertModel, EmbeddingError> {
    // Sentence-transformers exports sometimes nest weights under a `bert.` prefix.
    let vb = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
        vb.pp("bert")
    } else {
        vb
    };

    BertModel::load(vb, config).map_err(|e| EmbeddingError::ModelLoadFailed {
        reason: format!("failed to load BERT model: {}", e),
    })
}
