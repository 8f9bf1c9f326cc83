use thiserror::Error;

/// A request lacks the input its task needs
///
/// The display text is the localized message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MissingInputError {
    /// Summary without text or images
    #[error("请输入文章内容或图片")]
    ContentOrImages,
    /// Keyword extraction without a keyword
    #[error("请输入关键词")]
    Keyword,
    /// Keyword extraction without text or images to search
    #[error("请输入内容或上传图片")]
    KeywordSource,
    /// Book note without a title, text or images
    #[error("请输入书名或书籍内容")]
    BookInput,
    /// PDF extraction without document data
    #[error("缺少文件内容")]
    PdfData,
    /// Transcription without an audio clip
    #[error("请上传音频文件")]
    Audio,
    /// Voice summary without a transcript
    #[error("请提供转录文本")]
    Transcript,
    /// Image fetch without a URL
    #[error("缺少图片URL")]
    ImageUrl,
}

impl MissingInputError {
    /// Request field that is missing
    pub const fn field(self) -> &'static str {
        match self {
            Self::ContentOrImages | Self::KeywordSource => "content",
            Self::Keyword => "keyword",
            Self::BookInput => "bookName",
            Self::PdfData => "base64",
            Self::Audio => "audio",
            Self::Transcript => "transcript",
            Self::ImageUrl => "url",
        }
    }
}

/// Failure of a task as seen by the endpoint layer
#[derive(Debug, Error)]
pub enum TaskError {
    /// Client supplied too little input
    #[error(transparent)]
    MissingInput(#[from] MissingInputError),

    /// Upstream rejected the call; the message is safe to show
    #[error("{message}")]
    Upstream { message: String },

    /// Upstream could not be reached or answered garbage; details are logged only
    #[error("{message}")]
    Transport { message: &'static str },

    /// The remote image host refused the fetch
    #[error("获取图片失败")]
    ImageUnavailable,
}

impl TaskError {
    /// Message that is safe to expose to API consumers
    pub fn client_message(&self) -> String {
        self.to_string()
    }
}
