//! Asynchronous decode: the pipeline's single suspension point.
//!
//! An [`ImageDecoder`] turns encoded bytes into a [`DecodedImage`] and
//! signals completion by resolving its future. Dropping the future before it
//! resolves abandons the decode; any result produced afterwards is freed.

use std::future::Future;

use super::{decode_image, DecodeError, DecodedImage};

/// Source of decoded pixels for the crop pipeline.
pub trait ImageDecoder {
    /// Decode `bytes`, resolving once the pixel buffer is ready.
    fn decode(&self, bytes: &[u8]) -> impl Future<Output = Result<DecodedImage, DecodeError>>;
}

/// Decodes on the polling task when first polled.
///
/// Suitable for WASM and for callers that already run the pipeline on a
/// worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDecoder;

impl ImageDecoder for InlineDecoder {
    fn decode(&self, bytes: &[u8]) -> impl Future<Output = Result<DecodedImage, DecodeError>> {
        async move { decode_image(bytes) }
    }
}

/// Decodes on a dedicated thread and hands the result back over a oneshot
/// channel.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDecoder;

#[cfg(not(target_arch = "wasm32"))]
impl ImageDecoder for ThreadDecoder {
    fn decode(&self, bytes: &[u8]) -> impl Future<Output = Result<DecodedImage, DecodeError>> {
        use futures::channel::oneshot;

        let (tx, rx) = oneshot::channel();
        let owned = bytes.to_vec();

        let spawned = std::thread::Builder::new()
            .name("contour-crop-decode".to_string())
            .spawn(move || {
                let result = decode_image(&owned);
                if tx.send(result).is_err() {
                    tracing::debug!("decode abandoned by caller, discarding result");
                }
            });

        async move {
            if let Err(e) = spawned {
                tracing::error!("failed to spawn decode thread: {}", e);
                return Err(DecodeError::Interrupted);
            }
            rx.await.unwrap_or(Err(DecodeError::Interrupted))
        }
    }
}
