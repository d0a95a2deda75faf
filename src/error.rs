use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::classifier::ModelError;
use crate::models::ErrorResponse;

/// Everything that can go wrong while serving `/predict`.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("No file part in the request")]
    MissingFilePart,

    #[error("No file selected for uploading")]
    EmptyFilename,

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    Model(#[from] ModelError),

    #[error("Worker pool unavailable: {0}")]
    Blocking(String),
}

impl From<BlockingError> for PredictError {
    fn from(e: BlockingError) -> Self {
        Self::Blocking(e.to_string())
    }
}

impl From<actix_multipart::MultipartError> for PredictError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        Self::Multipart(e.to_string())
    }
}

impl PredictError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFilePart | Self::EmptyFilename | Self::Multipart(_)
        )
    }
}

impl ResponseError for PredictError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
