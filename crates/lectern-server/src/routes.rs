use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{MethodRouter, post},
};
use lectern_config::BodyLimits;
use lectern_tasks::{
    BookNoteRequest, FetchImageRequest, KeywordRequest, PdfRequest, SummaryRequest, TaskService, TranscriptOutcome,
    VoiceSummaryRequest,
};
use serde::Serialize;

use crate::{
    error::{ApiError, Result},
    extract::{ApiJson, TranscribeUpload},
};

#[derive(Debug, Serialize)]
struct SummaryResponse {
    summary: String,
}

#[derive(Debug, Serialize)]
struct KeywordResponse {
    extracted: String,
}

#[derive(Debug, Serialize)]
struct PdfResponse {
    text: String,
}

#[derive(Debug, Serialize)]
struct ImageResponse {
    base64: String,
}

/// Create the router for every task endpoint
pub(crate) fn endpoint_router(limits: BodyLimits) -> Router<Arc<TaskService>> {
    let json = limits.json_body_bytes;

    Router::new()
        .route("/api/summary", gated(post(summary), json))
        .route("/api/extract-keyword", gated(post(extract_keyword), json))
        .route("/api/book-summary", gated(post(book_summary), json))
        .route("/api/parse-pdf", gated(post(parse_pdf), json))
        .route("/api/transcribe", gated(post(transcribe), limits.audio_body_bytes))
        .route("/api/voice-summary", gated(post(voice_summary), json))
        .route("/api/fetch-image", gated(post(fetch_image), json))
}

/// Answer bare `OPTIONS`, refuse every other method but `POST` and cap the body
fn gated(route: MethodRouter<Arc<TaskService>>, body_limit: usize) -> MethodRouter<Arc<TaskService>> {
    route
        .options(preflight)
        .fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(body_limit))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub(crate) async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn summary(
    State(service): State<Arc<TaskService>>,
    ApiJson(request): ApiJson<SummaryRequest>,
) -> Result<Json<SummaryResponse>> {
    let summary = service.summarize(request).await?;
    Ok(Json(SummaryResponse { summary }))
}

async fn extract_keyword(
    State(service): State<Arc<TaskService>>,
    ApiJson(request): ApiJson<KeywordRequest>,
) -> Result<Json<KeywordResponse>> {
    let extracted = service.extract_keyword(request).await?;
    Ok(Json(KeywordResponse { extracted }))
}

async fn book_summary(
    State(service): State<Arc<TaskService>>,
    ApiJson(request): ApiJson<BookNoteRequest>,
) -> Result<Json<SummaryResponse>> {
    let summary = service.book_note(request).await?;
    Ok(Json(SummaryResponse { summary }))
}

async fn parse_pdf(
    State(service): State<Arc<TaskService>>,
    ApiJson(request): ApiJson<PdfRequest>,
) -> Result<Json<PdfResponse>> {
    let text = service.parse_pdf(request).await?;
    Ok(Json(PdfResponse { text }))
}

async fn transcribe(
    State(service): State<Arc<TaskService>>,
    TranscribeUpload(request): TranscribeUpload,
) -> Result<Json<TranscriptOutcome>> {
    let outcome = service.transcribe(request).await?;
    Ok(Json(outcome))
}

async fn voice_summary(
    State(service): State<Arc<TaskService>>,
    ApiJson(request): ApiJson<VoiceSummaryRequest>,
) -> Result<Json<SummaryResponse>> {
    let summary = service.voice_summary(request).await?;
    Ok(Json(SummaryResponse { summary }))
}

async fn fetch_image(
    State(service): State<Arc<TaskService>>,
    ApiJson(request): ApiJson<FetchImageRequest>,
) -> Result<Json<ImageResponse>> {
    let base64 = service.fetch_image(request).await?;
    Ok(Json(ImageResponse { base64 }))
}
