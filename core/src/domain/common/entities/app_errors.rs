use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedImageFormat(String),

    #[error("Please enter a food description.")]
    EmptyInput,

    #[error("Google API key not found. Please set the GOOGLE_API_KEY environment variable.")]
    MissingCredential,

    #[error("Internal server error")]
    InternalServerError,
}
