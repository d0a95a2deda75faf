use actix_multipart::Multipart;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::catalog;
use crate::classifier::{classify, Classification, Classifier};
use crate::error::PredictError;
use crate::models::PredictionResponse;
use crate::preprocess::preprocess_image;
use crate::upload::UploadDir;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared, read-only state handed to every worker.
pub struct AppState {
    pub classifier: Box<dyn Classifier>,
    pub uploads: UploadDir,
}

impl AppState {
    pub fn new(classifier: impl Classifier + 'static, uploads: UploadDir) -> Self {
        Self {
            classifier: Box::new(classifier),
            uploads,
        }
    }
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "OK" }))
}

pub async fn predict(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, PredictError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("predict", %request_id);

    let result = run_prediction(state, payload).instrument(span.clone()).await;
    let _enter = span.enter();
    match result {
        Ok(response) => {
            info!(
                "Predicted {} with confidence {}",
                response.prediction, response.confidence
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) if e.is_client_error() => {
            warn!("Rejected upload: {}", e);
            Err(e)
        }
        Err(e) => {
            error!("Prediction failed: {}", e);
            Err(e)
        }
    }
}

async fn run_prediction(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<PredictionResponse, PredictError> {
    let upload = save_upload(payload, &state.uploads).await?;

    // The upload moves into the blocking task and is deleted when it drops
    // there, on success and on error alike.
    let Classification { label, probability } =
        web::block(move || -> Result<Classification, PredictError> {
            let batch = preprocess_image(upload.path())?;
            Ok(classify(state.classifier.as_ref(), batch)?)
        })
        .await??;

    Ok(PredictionResponse::new(
        label,
        probability,
        catalog::lookup(label.as_str()),
    ))
}

/// Streams the `file` field into a fresh temporary file.
///
/// Other fields, and a `file` field sent without a filename, are drained and
/// ignored.
async fn save_upload(
    mut payload: Multipart,
    uploads: &UploadDir,
) -> Result<NamedTempFile, PredictError> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let (name, filename) = {
            let disposition = field.content_disposition();
            (
                disposition.get_name().map(str::to_owned),
                disposition.get_filename().map(str::to_owned),
            )
        };

        // a part without a filename attribute is a plain form value
        let filename = match filename {
            Some(filename) if name.as_deref() == Some("file") => filename,
            _ => {
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
                continue;
            }
        };

        if filename.is_empty() {
            return Err(PredictError::EmptyFilename);
        }

        let uploads = uploads.clone();
        let mut file = web::block(move || uploads.new_file()).await??;
        debug!("Saving {} to {}", filename, file.path().display());

        while let Some(chunk) = field.next().await {
            let data = chunk?;
            file = web::block(move || file.write_all(&data).map(|_| file)).await??;
        }

        return Ok(file);
    }

    Err(PredictError::MissingFilePart)
}
