use candle_core::Device;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

#[cfg(not(any(feature = "metal", feature = "cuda")))]
use tracing::debug;

use super::error::EmbeddingError;

/// Picks the first GPU backend compiled in (`metal`, then `cuda`) that opens, else CPU.
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(device) => {
                info!(backend = "metal", "Using GPU acceleration for embeddings");
                return Ok(device);
            }
            Err(e) => warn!(backend = "metal", error = %e, "GPU backend unavailable"),
        }
    }

    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(device) => {
                info!(backend = "cuda", "Using GPU acceleration for embeddings");
                return Ok(device);
            }
            Err(e) => warn!(backend = "cuda", error = %e, "GPU backend unavailable"),
        }
    }

    #[cfg(not(any(feature = "metal", feature = "cuda")))]
    {
        debug!("No GPU backend compiled, embedding on CPU");
    }

    #[cfg(any(feature = "metal", feature = "cuda"))]
    {
        warn!("Falling back to CPU device");
    }

    Ok(Device::Cpu)
}
