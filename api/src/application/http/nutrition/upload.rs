use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use nutriai_core::domain::nutrition::{
    entities::ImageRequest,
    image::{UploadFormat, prepare_upload},
};
use tracing::error;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Largest upload accepted on the image routes.
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Raw `image` field of a multipart upload.
#[derive(Debug)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl ImageUpload {
    /// Checks the declared format and re-encodes the upload as JPEG.
    pub async fn normalize(self) -> Result<ImageRequest, ApiError> {
        let format = UploadFormat::detect(self.file_name.as_deref(), self.content_type.as_deref())?;
        tracing::debug!(declared_format = ?format, size_bytes = self.data.len(), "Normalizing upload");
        let request = prepare_upload(self.data).await?;

        Ok(request)
    }
}

// Body limit rejections surface through the multipart stream.
fn multipart_error(context: &str, e: MultipartError) -> ApiError {
    error!("{}: {}", context, e);
    let message = format!("{}: {}", context, e.body_text());

    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(message)
    } else {
        ApiError::BadRequest(message)
    }
}

pub async fn read_image_upload(multipart: &mut Multipart) -> Result<ImageUpload, ApiError> {
    let mut upload: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read image", e))?;

        upload = Some(ImageUpload {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }

    upload.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))
}
