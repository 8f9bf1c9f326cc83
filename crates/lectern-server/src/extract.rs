use axum::{
    Json,
    extract::{FromRequest, Multipart, Request, multipart::MultipartError},
};
use lectern_tasks::{AudioInput, TranscribeRequest};
use serde::Deserialize;

use crate::error::ApiError;

/// Field carrying the audio file in multipart uploads
const AUDIO_FIELD: &str = "audio";

/// Field carrying the speaker-labelling flag
const SPEAKER_FIELD: &str = "enableSpeaker";

/// Type assumed for uploads that declare none
const DEFAULT_AUDIO_TYPE: &str = "audio/webm";

/// JSON extractor whose rejections use the `{ "error": ... }` body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Transcription input from either a multipart upload or a JSON body
///
/// Multipart requests carry the clip in the `audio` file field and the flag
/// as the text `true`; JSON requests carry a ready-made data URI.
pub struct TranscribeUpload(pub TranscribeRequest);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranscribeJson {
    #[serde(default)]
    audio: Option<String>,
    #[serde(default)]
    enable_speaker: Option<bool>,
}

impl<S> FromRequest<S> for TranscribeUpload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(request, state).await?;
            return read_multipart(multipart).await.map(Self);
        }

        let Json(body) = Json::<TranscribeJson>::from_request(request, state).await?;

        Ok(Self(TranscribeRequest {
            audio: body.audio.map(AudioInput::DataUri),
            speaker_diarization: body.enable_speaker.unwrap_or(false),
        }))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<TranscribeRequest, ApiError> {
    let mut request = TranscribeRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name().unwrap_or_default() {
            AUDIO_FIELD => {
                let mime_type = field
                    .content_type()
                    .filter(|ct| !ct.is_empty())
                    .unwrap_or(DEFAULT_AUDIO_TYPE)
                    .to_owned();
                let bytes = field.bytes().await.map_err(multipart_error)?;

                request.audio = Some(AudioInput::Blob {
                    bytes: bytes.to_vec(),
                    mime_type,
                });
            }
            SPEAKER_FIELD => {
                request.speaker_diarization = field.text().await.map_err(multipart_error)? == "true";
            }
            _ => {}
        }
    }

    Ok(request)
}

fn multipart_error(error: MultipartError) -> ApiError {
    tracing::debug!(error = %error, "failed to read multipart field");
    ApiError::Rejected {
        status: error.status(),
        message: error.body_text(),
    }
}
