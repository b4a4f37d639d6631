use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::domain::{
    common::entities::app_errors::CoreError, nutrition::entities::ImageRequest,
};

pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// Raster formats accepted from uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Jpeg,
    Png,
}

impl UploadFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(UploadFormat::Jpeg),
            "png" => Some(UploadFormat::Png),
            _ => None,
        }
    }

    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        match mime_type.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(UploadFormat::Jpeg),
            "image/png" => Some(UploadFormat::Png),
            _ => None,
        }
    }

    /// Picks the format from the uploaded file name, falling back to the
    /// declared content type. Only gates the upload; decoding trusts the bytes.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Result<Self, CoreError> {
        let extension = file_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str());

        if let Some(extension) = extension {
            return Self::from_extension(extension)
                .ok_or_else(|| CoreError::UnsupportedImageFormat(extension.to_string()));
        }

        match content_type {
            Some(mime_type) => Self::from_mime_type(mime_type)
                .ok_or_else(|| CoreError::UnsupportedImageFormat(mime_type.to_string())),
            None => Err(CoreError::UnsupportedImageFormat("unknown".to_string())),
        }
    }

    pub fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(UploadFormat::Jpeg),
            ImageFormat::Png => Some(UploadFormat::Png),
            _ => None,
        }
    }
}

/// Decodes an upload and re-encodes it as an RGB JPEG.
///
/// The format is read from the data itself, so a JPEG saved as `.png` is still
/// accepted. Anything that is neither JPEG nor PNG is rejected.
pub fn normalize_to_jpeg(data: &[u8]) -> Result<ImageRequest, CoreError> {
    if data.is_empty() {
        return Err(CoreError::InvalidImage("file is empty".to_string()));
    }

    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| CoreError::InvalidImage(e.to_string()))?;

    match reader.format() {
        Some(format) if UploadFormat::from_image_format(format).is_some() => {}
        Some(other) => {
            let name = other.extensions_str().first().copied().unwrap_or("unknown");
            return Err(CoreError::UnsupportedImageFormat(name.to_string()));
        }
        None => {
            return Err(CoreError::InvalidImage(
                "unrecognized image data".to_string(),
            ));
        }
    }

    let decoded = reader
        .decode()
        .map_err(|e| CoreError::InvalidImage(e.to_string()))?;

    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());

    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageFormat::Jpeg).map_err(|e| {
        tracing::error!("Failed to encode upload as JPEG: {}", e);
        CoreError::InvalidImage(e.to_string())
    })?;

    Ok(ImageRequest::new(buffer.into_inner(), JPEG_MIME_TYPE))
}

/// Runs [`normalize_to_jpeg`] on the blocking pool so decoding never stalls the
/// async workers.
pub async fn prepare_upload(data: Vec<u8>) -> Result<ImageRequest, CoreError> {
    tokio::task::spawn_blocking(move || normalize_to_jpeg(&data))
        .await
        .map_err(|e| {
            tracing::error!("Image normalization task failed: {}", e);
            CoreError::InternalServerError
        })?
}
