use candle_core::Device;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

#[cfg(not(any(feature = "metal", feature = "cuda")))]
use tracing::debug;

/// Picks the compute device for embedding inference.
///
/// GPU backends are tried in feature order (Metal, then CUDA); an
/// unavailable backend falls through to the next, ending at CPU. Encoding a
/// short text pair is cheap enough that CPU is always an acceptable floor.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Embedding inference on Metal");
            return device;
        }
        Err(e) => warn!(error = %e, "Metal compiled in but unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Embedding inference on CUDA");
            return device;
        }
        Err(e) => warn!(error = %e, "CUDA compiled in but unavailable"),
    }

    #[cfg(not(any(feature = "metal", feature = "cuda")))]
    debug!("No GPU backend compiled, embedding inference on CPU");

    #[cfg(any(feature = "metal", feature = "cuda"))]
    warn!("No GPU device available, embedding inference on CPU");

    Device::Cpu
}
