//! HTTP upload service
//!
//! Exposes the converter over two routes: `POST /convert` accepts a
//! multipart .docx upload and returns the rendered fragments as JSON, and
//! `GET /health` reports service liveness. All document semantics live in
//! the `document` and `render` modules; this layer only shuttles bytes and
//! maps failures to the responses clients are written against.

pub(crate) mod sanitize;

pub use sanitize::sanitize_filename;

use axum::extract::{DefaultBodyLimit, Multipart};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use thiserror::Error;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::document::parse_document;
use crate::render::{convert_document, SectionIds};

/// Success payload for `POST /convert`.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub html_content: Vec<String>,
    pub filename: String,
}

/// User-visible failures at the upload boundary.
///
/// The display strings are part of the API; clients match on them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file provided")]
    MissingFile,
    #[error("No file selected")]
    EmptyFilename,
    #[error("Only DOCX files are allowed")]
    UnsupportedExtension,
    #[error("Conversion failed: {0}")]
    Conversion(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Conversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "conversion failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn build_router(config: &Config) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/convert", post(convert))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(RequestBodyLimitLayer::new(config.max_upload_bytes))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    timestamp_utc: String,
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            service: "DOCX to HTML Converter",
            timestamp_utc: chrono::Utc::now().to_rfc3339(),
        }),
    )
}

async fn convert(mut multipart: Multipart) -> Result<Json<ConvertResponse>, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::MissingFile)?
    {
        if field.name() != Some("file") {
            continue;
        }
        // A part without a filename attribute is a plain form value, not an
        // upload; an explicit empty filename means "no file selected".
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|err| ApiError::Conversion(anyhow::Error::new(err)))?;
        upload = Some((filename, data));
        break;
    }

    let Some((filename, data)) = upload else {
        return Err(ApiError::MissingFile);
    };
    if filename.is_empty() {
        return Err(ApiError::EmptyFilename);
    }
    if !allowed_file(&filename) {
        return Err(ApiError::UnsupportedExtension);
    }

    let document = parse_document(&data, &filename)?;
    let html_content = convert_document(&document, &mut SectionIds::default());

    tracing::info!(
        filename = %filename,
        paragraphs = document.metadata.paragraph_count,
        words = document.metadata.word_count,
        fragments = html_content.len(),
        "converted upload"
    );

    Ok(Json(ConvertResponse {
        success: true,
        html_content,
        filename: sanitize_filename(&filename),
    }))
}

/// The upload must carry a .docx extension, case-insensitively.
fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("docx"))
        .unwrap_or(false)
}
