use super::*;
use std::path::PathBuf;

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    dot / (na * nb)
}

mod config_tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_embedder_config_default_is_stub() {
        let config = EmbedderConfig::default();
        assert!(config.is_stub());
        assert_eq!(config.max_seq_len, crate::constants::DEFAULT_MAX_SEQ_LEN);
        assert_eq!(config.stub_dim, crate::constants::DEFAULT_EMBEDDING_DIM);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_embedder_config_paths() {
        let config = EmbedderConfig::new("/models/minilm");
        assert!(!config.is_stub());
        assert_eq!(
            config.config_path(),
            Some(PathBuf::from("/models/minilm/config.json"))
        );
        assert_eq!(
            config.weights_path(),
            Some(PathBuf::from("/models/minilm/model.safetensors"))
        );
        assert_eq!(
            config.tokenizer_path(),
            Some(PathBuf::from("/models/minilm/tokenizer.json"))
        );
    }

    #[test]
    fn test_embedder_config_rejects_zero_seq_len() {
        let config = EmbedderConfig::stub().with_max_seq_len(0);
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_embedder_config_missing_model_dir() {
        let config = EmbedderConfig::new("/definitely/not/a/model/dir");
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_embedder_config_missing_weights() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{}").unwrap();

        let config = EmbedderConfig::new(dir.path());
        match config.validate() {
            Err(EmbeddingError::ModelNotFound { path }) => {
                assert!(path.ends_with("model.safetensors"));
            }
            other => panic!("expected ModelNotFound, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_embedder_config_from_env() {
        // SAFETY: Test code only, serialized with other env tests.
        unsafe {
            env::set_var(EmbedderConfig::ENV_MODEL_PATH, "  /models/minilm  ");
            env::set_var(EmbedderConfig::ENV_MAX_SEQ_LEN, "128");
        }

        let config = EmbedderConfig::from_env();
        assert_eq!(config.model_dir, Some(PathBuf::from("/models/minilm")));
        assert_eq!(config.max_seq_len, 128);

        // SAFETY: Test code only, serialized with other env tests.
        unsafe {
            env::remove_var(EmbedderConfig::ENV_MODEL_PATH);
            env::remove_var(EmbedderConfig::ENV_MAX_SEQ_LEN);
        }
    }

    #[test]
    #[serial]
    fn test_embedder_config_from_env_blank_is_stub() {
        // SAFETY: Test code only, serialized with other env tests.
        unsafe {
            env::set_var(EmbedderConfig::ENV_MODEL_PATH, "   ");
            env::remove_var(EmbedderConfig::ENV_MAX_SEQ_LEN);
        }

        let config = EmbedderConfig::from_env();
        assert!(config.is_stub());

        // SAFETY: Test code only, serialized with other env tests.
        unsafe { env::remove_var(EmbedderConfig::ENV_MODEL_PATH) };
    }
}

mod stub_tests {
    use super::*;

    #[test]
    fn test_hashing_embedder_dimension_and_norm() {
        let embedder = HashingEmbedder::new(64);
        let v = embedder.embed("I love to lead and win").unwrap();

        assert_eq!(v.len(), 64);
        assert_eq!(embedder.embedding_dim(), 64);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
        assert!(embedder.is_stub());
    }

    #[test]
    fn test_hashing_embedder_deterministic() {
        let embedder = HashingEmbedder::default();
        assert_eq!(
            embedder.embed("calm and patient").unwrap(),
            embedder.embed("calm and patient").unwrap()
        );
    }

    #[test]
    fn test_hashing_embedder_normalizes_input() {
        let embedder = HashingEmbedder::default();
        assert_eq!(
            embedder.embed("Calm, and PATIENT!").unwrap(),
            embedder.embed("calm and patient").unwrap()
        );
    }

    #[test]
    fn test_hashing_embedder_shared_vocabulary_is_similar() {
        let embedder = HashingEmbedder::default();
        let profile = embedder.embed("ambitious driven compete lead").unwrap();
        let related = embedder.embed("ambitious driven").unwrap();

        assert!(cosine(&profile, &related) > 0.3);
    }

    #[test]
    fn test_hashing_embedder_is_total() {
        let embedder = HashingEmbedder::new(16);
        let emoji = "\u{1F600}".repeat(22);

        for text in ["?!", "", "   ", emoji.as_str()] {
            let v = embedder.embed(text).unwrap();
            let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-5, "text {text:?} has norm {norm}");
            assert_eq!(v, embedder.embed(text).unwrap());
        }
    }

    #[test]
    fn test_hashing_embedder_zero_dim_clamped() {
        assert_eq!(HashingEmbedder::new(0).embedding_dim(), 1);
    }

    #[test]
    fn test_embed_batch_default_matches_single() {
        let embedder = HashingEmbedder::default();
        let batch = embedder.embed_batch(&["lead", "peace"]).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], embedder.embed("lead").unwrap());
        assert_eq!(batch[1], embedder.embed("peace").unwrap());
    }
}

mod adapter_tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_fn_embedder() {
        let embedder = FnEmbedder::new(2, |text: &str| Ok(vec![text.len() as f32, 1.0]));
        assert_eq!(embedder.embed("abc").unwrap(), vec![3.0, 1.0]);
        assert_eq!(embedder.embedding_dim(), 2);
        assert!(!embedder.is_stub());
    }

    #[test]
    fn test_fn_embedder_propagates_error() {
        let embedder = FnEmbedder::new(2, |_: &str| {
            Err(EmbeddingError::InferenceFailed {
                reason: "offline".to_string(),
            })
        });
        let err = embedder.embed("anything").unwrap_err();
        assert!(err.to_string().contains("offline"));
    }

    fn dim_of<E: Embedder>(embedder: E) -> usize {
        embedder.embedding_dim()
    }

    #[test]
    fn test_blanket_impls_forward() {
        let arc: Arc<HashingEmbedder> = Arc::new(HashingEmbedder::new(8));
        let boxed: Box<dyn Embedder> = Box::new(HashingEmbedder::new(8));
        let direct = HashingEmbedder::new(8);

        assert_eq!(arc.embed("joy").unwrap(), direct.embed("joy").unwrap());
        assert_eq!(boxed.embed("joy").unwrap(), direct.embed("joy").unwrap());
        assert_eq!(dim_of(&direct), 8);
        assert!(arc.is_stub() && boxed.is_stub());
    }

    #[test]
    fn test_load_embedder_stub() {
        let embedder = load_embedder(EmbedderConfig::stub()).unwrap();
        assert!(embedder.is_stub());
        assert_eq!(
            embedder.embedding_dim(),
            crate::constants::DEFAULT_EMBEDDING_DIM
        );
    }

    #[test]
    fn test_load_embedder_missing_model() {
        let err = load_embedder(EmbedderConfig::new("/no/such/model"))
            .err()
            .expect("missing model directory must fail");
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }
}

#[test]
fn test_l2_normalize() {
    let mut v = vec![3.0f32, 4.0];
    utils::l2_normalize(&mut v);
    assert!((v[0] - 0.6).abs() < 1e-6);
    assert!((v[1] - 0.8).abs() < 1e-6);

    let mut zero = vec![0.0f32; 3];
    utils::l2_normalize(&mut zero);
    assert_eq!(zero, vec![0.0; 3]);
}

#[test]
fn test_error_display() {
    let err = EmbeddingError::DimensionMismatch {
        expected: 384,
        actual: 768,
    };
    assert!(err.to_string().contains("384"));
    assert!(err.to_string().contains("768"));

    let err = EmbeddingError::DegenerateVector {
        reason: "zero norm".to_string(),
    };
    assert_eq!(err.to_string(), "degenerate embedding: zero norm");
}

#[test]
#[cfg(not(any(feature = "metal", feature = "cuda")))]
fn test_select_device_without_gpu_features_is_cpu() {
    let device = device::select_device().unwrap();
    assert!(matches!(device, candle_core::Device::Cpu));
}
