use std::sync::Arc;

use lectern_inference::{ImageSource, InferenceBackend, InferenceError};
use lectern_prompts::TaskKind;

use crate::{
    error::{MissingInputError, TaskError},
    payload::{Models, build_payload},
    transcript::{TranscriptFilter, TranscriptVerdict},
    types::{
        AudioInput, BookNoteRequest, FetchImageRequest, KeywordRequest, PdfRequest, SummaryRequest, TaskRequest,
        TranscribeRequest, TranscriptOutcome, VoiceSummaryRequest,
    },
};

const UPSTREAM_FALLBACK: &str = "调用 AI 失败";
const VOICE_UPSTREAM_FALLBACK: &str = "生成总结失败";
const SERVER_ERROR: &str = "服务器错误";
const TRANSCRIBE_FAILED: &str = "转录失败";
const IMAGE_FETCH_FAILED: &str = "获取图片失败";
const UNNAMED_FILE: &str = "未命名文件";

/// Characters of a transcript echoed into debug logs
const TRANSCRIPT_PREVIEW_CHARS: usize = 100;

/// Transport-independent implementation of every endpoint
///
/// Each call validates its request, performs one upstream call and applies
/// the per-task fallback policy. Nothing is shared between calls except the
/// read-only model table and transcript filter.
pub struct TaskService {
    backend: Arc<dyn InferenceBackend>,
    images: Arc<dyn ImageSource>,
    models: Models,
    filter: TranscriptFilter,
}

impl TaskService {
    pub fn new(
        backend: Arc<dyn InferenceBackend>,
        images: Arc<dyn ImageSource>,
        models: Models,
        filter: TranscriptFilter,
    ) -> Self {
        Self {
            backend,
            images,
            models,
            filter,
        }
    }

    /// Summarize an article given as text, images or both
    pub async fn summarize(&self, request: SummaryRequest) -> Result<String, TaskError> {
        let text = self.complete(TaskRequest::Summary(request), UPSTREAM_FALLBACK).await?;
        Ok(text.unwrap_or_else(|| "无法生成摘要".to_owned()))
    }

    /// Find passages related to a keyword
    pub async fn extract_keyword(&self, request: KeywordRequest) -> Result<String, TaskError> {
        let text = self
            .complete(TaskRequest::KeywordExtract(request), UPSTREAM_FALLBACK)
            .await?;
        Ok(text.unwrap_or_else(|| "未找到相关内容".to_owned()))
    }

    /// Write reading notes in the requested style
    pub async fn book_note(&self, request: BookNoteRequest) -> Result<String, TaskError> {
        let text = self.complete(TaskRequest::BookNote(request), UPSTREAM_FALLBACK).await?;
        Ok(text.unwrap_or_else(|| "无法生成读书笔记".to_owned()))
    }

    /// Summarize a transcript in the requested style
    pub async fn voice_summary(&self, request: VoiceSummaryRequest) -> Result<String, TaskError> {
        let text = self
            .complete(TaskRequest::VoiceSummary(request), VOICE_UPSTREAM_FALLBACK)
            .await?;
        Ok(text.unwrap_or_else(|| "无法生成总结".to_owned()))
    }

    /// Extract the text of a PDF document
    ///
    /// Upstream failures yield a bracketed placeholder naming the file
    /// instead of an error; only missing input fails.
    pub async fn parse_pdf(&self, request: PdfRequest) -> Result<String, TaskError> {
        let filename = request
            .filename
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNNAMED_FILE.to_owned());

        let payload = build_payload(&TaskRequest::PdfExtract(request), &self.models)?;

        match self.backend.infer(&payload.messages, &payload.model).await {
            Ok(response) => Ok(response.text.unwrap_or_default()),
            Err(InferenceError::Upstream { status, message }) => {
                tracing::warn!(%filename, status, message = ?message, "PDF extraction rejected upstream");
                Ok(format!("[无法解析PDF文件: {filename}]"))
            }
            Err(e) => {
                tracing::error!(%filename, error = %e, "PDF extraction failed");
                Ok(format!("[PDF解析失败: {filename}]"))
            }
        }
    }

    /// Transcribe an audio clip and screen out non-speech results
    ///
    /// Upstream failures are reported inside the outcome rather than as an
    /// error; only missing input fails.
    pub async fn transcribe(&self, request: TranscribeRequest) -> Result<TranscriptOutcome, TaskError> {
        if let Some(audio) = &request.audio {
            let mime_type = match audio {
                AudioInput::Blob { mime_type, .. } => mime_type.as_str(),
                AudioInput::DataUri(_) => "data-uri",
            };
            tracing::debug!(
                bytes = audio.len(),
                %mime_type,
                speaker_diarization = request.speaker_diarization,
                "received audio for transcription"
            );
        }

        let payload = build_payload(&TaskRequest::Transcribe(request), &self.models)?;

        let raw = match self.backend.infer(&payload.messages, &payload.model).await {
            Ok(response) => response.text.unwrap_or_default(),
            Err(InferenceError::Upstream { status, message }) => {
                tracing::error!(status, message = ?message, "transcription rejected upstream");
                return Ok(TranscriptOutcome {
                    transcript: String::new(),
                    error: Some(message.unwrap_or_else(|| TRANSCRIBE_FAILED.to_owned())),
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "transcription failed");
                return Ok(TranscriptOutcome {
                    transcript: String::new(),
                    error: Some(TRANSCRIBE_FAILED.to_owned()),
                });
            }
        };

        let preview: String = raw.chars().take(TRANSCRIPT_PREVIEW_CHARS).collect();
        tracing::debug!(%preview, "upstream transcript");

        match self.filter.classify(&raw) {
            TranscriptVerdict::Valid(transcript) => Ok(TranscriptOutcome {
                transcript,
                error: None,
            }),
            TranscriptVerdict::Invalid(reason) => {
                tracing::debug!(?reason, "discarding transcript");
                Ok(TranscriptOutcome::default())
            }
        }
    }

    /// Download a remote image and return it as a data URI
    pub async fn fetch_image(&self, request: FetchImageRequest) -> Result<String, TaskError> {
        let url = request
            .url
            .filter(|url| !url.trim().is_empty())
            .ok_or(MissingInputError::ImageUrl)?;

        self.images.fetch_data_uri(&url).await.map_err(|e| match e {
            InferenceError::Upstream { .. } => TaskError::ImageUnavailable,
            e => {
                tracing::error!(%url, error = %e, "image proxy failed");
                TaskError::Transport {
                    message: IMAGE_FETCH_FAILED,
                }
            }
        })
    }

    /// One upstream call for the tasks that surface failures as errors
    async fn complete(&self, request: TaskRequest, fallback: &str) -> Result<Option<String>, TaskError> {
        let kind = request.kind();
        let payload = build_payload(&request, &self.models)?;

        tracing::debug!(task = %kind, model = %payload.model, "dispatching task");

        match self.backend.infer(&payload.messages, &payload.model).await {
            Ok(response) => Ok(response.text),
            Err(e) => Err(map_inference_error(kind, e, fallback)),
        }
    }
}

fn map_inference_error(kind: TaskKind, error: InferenceError, fallback: &str) -> TaskError {
    match error {
        InferenceError::Upstream { status, message } => {
            tracing::error!(task = %kind, status, message = ?message, "upstream rejected task");
            TaskError::Upstream {
                message: message.unwrap_or_else(|| fallback.to_owned()),
            }
        }
        e => {
            tracing::error!(task = %kind, error = %e, "task failed");
            TaskError::Transport { message: SERVER_ERROR }
        }
    }
}
