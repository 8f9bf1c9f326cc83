use lectern_config::UpstreamConfig;
use lectern_inference::protocol::{ChatMessage, ContentPart};
use lectern_prompts::{Prompt, PromptParams, TaskKind, render};

use crate::{
    error::MissingInputError,
    types::{ContentItem, TaskRequest},
};

/// Upstream model family a task is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// Text, image and document tasks
    Vision,
    /// Audio-capable tasks
    Omni,
}

impl ModelFamily {
    pub const fn for_task(kind: TaskKind) -> Self {
        match kind {
            TaskKind::Summary | TaskKind::KeywordExtract | TaskKind::BookNote | TaskKind::PdfExtract => Self::Vision,
            TaskKind::Transcribe | TaskKind::VoiceSummary => Self::Omni,
        }
    }
}

/// Model identifiers per family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Models {
    pub vision: String,
    pub omni: String,
}

impl Models {
    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self {
            vision: config.vision_model.clone(),
            omni: config.omni_model.clone(),
        }
    }

    pub fn resolve(&self, family: ModelFamily) -> &str {
        match family {
            ModelFamily::Vision => &self.vision,
            ModelFamily::Omni => &self.omni,
        }
    }
}

/// Messages and model for one upstream call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPayload {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Validate a request and assemble its upstream payload
///
/// Image blocks come first in the order given, followed by a single text
/// block carrying the rendered prompt. PDF and audio requests carry exactly
/// one media block and one instruction block.
pub fn build_payload(request: &TaskRequest, models: &Models) -> Result<ChatPayload, MissingInputError> {
    let kind = request.kind();

    let (prompt, media) = match request {
        TaskRequest::Summary(req) => {
            let images = images_of(req.images.as_deref());
            if is_blank(req.content.as_deref()) && images.is_empty() {
                return Err(MissingInputError::ContentOrImages);
            }

            let params = PromptParams {
                content: req.content.as_deref(),
                has_images: !images.is_empty(),
                ..PromptParams::default()
            };
            (render(kind, None, &params), images)
        }
        TaskRequest::KeywordExtract(req) => {
            if is_blank(req.keyword.as_deref()) {
                return Err(MissingInputError::Keyword);
            }

            let images = images_of(req.images.as_deref());
            if is_blank(req.content.as_deref()) && images.is_empty() {
                return Err(MissingInputError::KeywordSource);
            }

            let params = PromptParams {
                content: req.content.as_deref(),
                keyword: req.keyword.as_deref(),
                has_images: !images.is_empty(),
                ..PromptParams::default()
            };
            (render(kind, None, &params), images)
        }
        TaskRequest::BookNote(req) => {
            let images = images_of(req.images.as_deref());
            if is_blank(req.book_name.as_deref()) && is_blank(req.content.as_deref()) && images.is_empty() {
                return Err(MissingInputError::BookInput);
            }

            let params = PromptParams {
                content: req.content.as_deref(),
                book_name: req.book_name.as_deref(),
                has_images: !images.is_empty(),
                ..PromptParams::default()
            };
            (render(kind, req.summary_type.as_deref(), &params), images)
        }
        TaskRequest::PdfExtract(req) => {
            let data = req
                .base64
                .as_deref()
                .filter(|data| !data.trim().is_empty())
                .ok_or(MissingInputError::PdfData)?;

            let prompt = render(kind, None, &PromptParams::default());
            (prompt, vec![ContentItem::Pdf(data.to_owned())])
        }
        TaskRequest::Transcribe(req) => {
            let audio = req
                .audio
                .as_ref()
                .filter(|audio| !audio.is_empty())
                .ok_or(MissingInputError::Audio)?;

            let params = PromptParams {
                speaker_diarization: req.speaker_diarization,
                ..PromptParams::default()
            };
            (render(kind, None, &params), vec![ContentItem::Audio(audio.clone())])
        }
        TaskRequest::VoiceSummary(req) => {
            if is_blank(req.transcript.as_deref()) {
                return Err(MissingInputError::Transcript);
            }

            let params = PromptParams {
                transcript: req.transcript.as_deref(),
                ..PromptParams::default()
            };
            let prompt = render(kind, req.summary_type.as_deref(), &params);

            // Text-only conversation: the transcript travels as a plain user message
            let mut messages = system_message(&prompt);
            messages.push(ChatMessage::user_text(prompt.instruction));
            return Ok(ChatPayload {
                model: models.resolve(ModelFamily::for_task(kind)).to_owned(),
                messages,
            });
        }
    };

    let mut parts: Vec<ContentPart> = media.into_iter().map(ContentItem::into_part).collect();
    parts.push(ContentPart::Text {
        text: prompt.instruction.clone(),
    });

    let mut messages = system_message(&prompt);
    messages.push(ChatMessage::user_parts(parts));

    Ok(ChatPayload {
        model: models.resolve(ModelFamily::for_task(kind)).to_owned(),
        messages,
    })
}

fn system_message(prompt: &Prompt) -> Vec<ChatMessage> {
    prompt.system.iter().map(ChatMessage::system).collect()
}

fn images_of(images: Option<&[String]>) -> Vec<ContentItem> {
    images
        .unwrap_or_default()
        .iter()
        .filter(|url| !url.is_empty())
        .cloned()
        .map(ContentItem::Image)
        .collect()
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
