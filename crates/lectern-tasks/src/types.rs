use lectern_inference::protocol::{ContentPart, FileData, ImageUrl, InputAudio};
use lectern_prompts::TaskKind;
use serde::{Deserialize, Serialize};

/// Container format declared for every audio clip; the upstream sniffs the
/// real encoding from the data URI
const DECLARED_AUDIO_FORMAT: &str = "wav";

/// One piece of user-supplied content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// Instruction or article text
    Text(String),
    /// Image URL or data URI
    Image(String),
    /// Audio clip
    Audio(AudioInput),
    /// Base64-encoded PDF document
    Pdf(String),
}

impl ContentItem {
    /// Wire content part for this item
    pub fn into_part(self) -> ContentPart {
        match self {
            Self::Text(text) => ContentPart::Text { text },
            Self::Image(url) => ContentPart::ImageUrl {
                image_url: ImageUrl { url },
            },
            Self::Audio(audio) => ContentPart::InputAudio {
                input_audio: InputAudio {
                    data: audio.into_data_uri(),
                    format: DECLARED_AUDIO_FORMAT.to_owned(),
                },
            },
            Self::Pdf(base64) => ContentPart::File {
                file: FileData {
                    file_type: "pdf".to_owned(),
                    file_data: base64,
                },
            },
        }
    }
}

/// Audio as uploaded, either raw bytes or an already-encoded data URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioInput {
    /// Multipart upload
    Blob { bytes: Vec<u8>, mime_type: String },
    /// `data:<mime>;base64,<payload>` string from a JSON body
    DataUri(String),
}

impl AudioInput {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Blob { bytes, .. } => bytes.is_empty(),
            Self::DataUri(uri) => uri.is_empty(),
        }
    }

    /// Size in bytes of the payload as received
    pub fn len(&self) -> usize {
        match self {
            Self::Blob { bytes, .. } => bytes.len(),
            Self::DataUri(uri) => uri.len(),
        }
    }

    /// Encode as a data URI; data URIs from clients pass through unchanged
    pub fn into_data_uri(self) -> String {
        match self {
            Self::Blob { bytes, mime_type } => lectern_inference::data_uri(&mime_type, &bytes),
            Self::DataUri(uri) => uri,
        }
    }
}

/// Article summary request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// Keyword extraction request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub keyword: Option<String>,
}

/// Book note request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookNoteRequest {
    #[serde(default)]
    pub book_name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub summary_type: Option<String>,
}

/// PDF text extraction request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PdfRequest {
    /// Base64-encoded document
    #[serde(default)]
    pub base64: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Transcription request, built from a multipart upload or a JSON body
#[derive(Debug, Clone, Default)]
pub struct TranscribeRequest {
    pub audio: Option<AudioInput>,
    pub speaker_diarization: bool,
}

/// Voice summary request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSummaryRequest {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub summary_type: Option<String>,
}

/// Image fetch request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchImageRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// A task request of any kind
#[derive(Debug, Clone)]
pub enum TaskRequest {
    Summary(SummaryRequest),
    KeywordExtract(KeywordRequest),
    BookNote(BookNoteRequest),
    PdfExtract(PdfRequest),
    Transcribe(TranscribeRequest),
    VoiceSummary(VoiceSummaryRequest),
}

impl TaskRequest {
    pub const fn kind(&self) -> TaskKind {
        match self {
            Self::Summary(_) => TaskKind::Summary,
            Self::KeywordExtract(_) => TaskKind::KeywordExtract,
            Self::BookNote(_) => TaskKind::BookNote,
            Self::PdfExtract(_) => TaskKind::PdfExtract,
            Self::Transcribe(_) => TaskKind::Transcribe,
            Self::VoiceSummary(_) => TaskKind::VoiceSummary,
        }
    }
}

/// Transcription result as returned to the client
///
/// Upstream failures still produce an outcome, with an empty transcript
/// and the failure text under `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranscriptOutcome {
    pub transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
