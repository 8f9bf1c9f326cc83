#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod client;
mod error;
mod http_client;
mod image;
pub mod protocol;

pub use client::{ChatCompletionClient, InferenceBackend, InferenceResponse};
pub use error::{InferenceError, Result};
pub use image::{HttpImageSource, ImageSource, data_uri};
