use strum::{AsRefStr, Display, EnumString};

/// Task families served by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum TaskKind {
    Summary,
    KeywordExtract,
    BookNote,
    PdfExtract,
    Transcribe,
    VoiceSummary,
}

/// Book note sub-types, `summaryType` on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum BookNoteStyle {
    /// Full structured summary
    #[default]
    Complete,
    /// Core points and quotes
    Keypoints,
    /// Markdown heading tree
    Mindmap,
    /// Action checklist
    Actionable,
}

/// Voice summary sub-types, `summaryType` on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum VoiceSummaryStyle {
    /// Meeting minutes
    #[default]
    Meeting,
    /// Key discussion points
    Keypoints,
    /// Action items
    Todo,
    /// Decision log
    Decision,
}

impl BookNoteStyle {
    /// Parse a client-supplied value, defaulting on absent or unknown input
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl VoiceSummaryStyle {
    /// Parse a client-supplied value, defaulting on absent or unknown input
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}
