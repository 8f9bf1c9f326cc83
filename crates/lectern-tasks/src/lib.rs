//! Task logic shared by every transport: request validation, payload
//! assembly, transcript screening and the per-task failure policy

#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod payload;
mod service;
mod transcript;
mod types;

pub use error::{MissingInputError, TaskError};
pub use payload::{ChatPayload, ModelFamily, Models, build_payload};
pub use service::TaskService;
pub use transcript::{Rejection, TranscriptFilter, TranscriptVerdict};
pub use types::{
    AudioInput, BookNoteRequest, ContentItem, FetchImageRequest, KeywordRequest, PdfRequest, SummaryRequest,
    TaskRequest, TranscribeRequest, TranscriptOutcome, VoiceSummaryRequest,
};
