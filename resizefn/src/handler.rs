//! The user function: resize the image named by the event
//!
//! Decoding and resampling are CPU-bound, so the whole open/resize/save
//! sequence runs on a blocking task while the invocation awaits it.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use resizefn_core::{Event, FunctionContext, Response};
use thiserror::Error;
use tracing::{debug, info};

/// Fixed target size for both dimensions.
pub const TARGET_SIZE: u32 = 300;

/// Prefix applied to the source file name for the output file.
pub const OUTPUT_PREFIX: &str = "resized_";

/// Success message, fixed by the function contract.
pub const SUCCESS_MESSAGE: &str = "图片处理完成";

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("event is missing a string imagePath field")]
    MissingImagePath,

    #[error("cannot process image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("resize task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Resize the image at `event.imagePath` to 300x300, writing the result
/// next to the source with a `resized_` file-name prefix.
///
/// The resize crops to fill the exact target size, so the output always
/// measures 300x300 regardless of the source aspect ratio.
pub async fn resize_image(
    event: Event,
    _context: FunctionContext,
) -> Result<Response, ResizeError> {
    let source = PathBuf::from(event.image_path().ok_or(ResizeError::MissingImagePath)?);
    let target = resized_path(&source);
    debug!(source = %source.display(), target = %target.display(), "resizing image");

    tokio::task::spawn_blocking(move || {
        let img = image::open(&source).map_err(|source_err| ResizeError::Image {
            path: source,
            source: source_err,
        })?;

        let resized = img.resize_to_fill(TARGET_SIZE, TARGET_SIZE, FilterType::Lanczos3);
        resized.save(&target).map_err(|source_err| ResizeError::Image {
            path: target.clone(),
            source: source_err,
        })?;

        info!(path = %target.display(), "wrote resized image");
        Ok::<(), ResizeError>(())
    })
    .await??;

    Ok(Response::new(SUCCESS_MESSAGE))
}

/// `photo.jpg` becomes `resized_photo.jpg` in the same directory.
pub fn resized_path(source: &Path) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    source.with_file_name(format!("{OUTPUT_PREFIX}{file_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resized_path_bare_file_name() {
        assert_eq!(
            resized_path(Path::new("photo.jpg")),
            PathBuf::from("resized_photo.jpg")
        );
    }

    #[test]
    fn test_resized_path_keeps_directory() {
        assert_eq!(
            resized_path(Path::new("/tmp/uploads/photo.png")),
            PathBuf::from("/tmp/uploads/resized_photo.png")
        );
    }

    #[tokio::test]
    async fn test_missing_image_path_field() {
        let err = resize_image(Event::default(), FunctionContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ResizeError::MissingImagePath));
    }
}
