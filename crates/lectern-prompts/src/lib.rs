//! Fixed instruction texts for every task the gateway proxies
//!
//! The registry is a pure lookup: a task kind, an optional sub-type and the
//! request parameters go in, the system prompt and the trailing user
//! instruction come out. Unknown sub-types fall back to the first variant of
//! their family instead of failing.

#![allow(clippy::must_use_candidate)]

mod style;
mod templates;

use indoc::formatdoc;

pub use style::{BookNoteStyle, TaskKind, VoiceSummaryStyle};

/// Prompt texts for one upstream call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// System message, absent for the PDF and transcription tasks
    pub system: Option<String>,
    /// Text block that trails any media blocks in the user message
    pub instruction: String,
}

/// Request values that are interpolated into a prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptParams<'a> {
    pub content: Option<&'a str>,
    pub keyword: Option<&'a str>,
    pub book_name: Option<&'a str>,
    pub transcript: Option<&'a str>,
    pub has_images: bool,
    pub speaker_diarization: bool,
}

/// Render the prompt for a task
///
/// `sub_type` is only consulted for book notes and voice summaries; any
/// value that is absent or unknown selects the family default.
pub fn render(kind: TaskKind, sub_type: Option<&str>, params: &PromptParams<'_>) -> Prompt {
    match kind {
        TaskKind::Summary => Prompt {
            system: Some(templates::SUMMARY_SYSTEM.to_owned()),
            instruction: summary_instruction(params.content),
        },
        TaskKind::KeywordExtract => Prompt {
            system: Some(templates::KEYWORD_SYSTEM.to_owned()),
            instruction: keyword_instruction(params.keyword.unwrap_or_default(), params.content),
        },
        TaskKind::BookNote => Prompt {
            system: Some(format!(
                "{}{}",
                templates::BOOK_NOTE_SYSTEM,
                book_note_prompt(BookNoteStyle::parse_or_default(sub_type))
            )),
            instruction: book_note_instruction(params),
        },
        TaskKind::PdfExtract => Prompt {
            system: None,
            instruction: templates::PDF_INSTRUCTION.to_owned(),
        },
        TaskKind::Transcribe => Prompt {
            system: None,
            instruction: transcription_prompt(params.speaker_diarization).to_owned(),
        },
        TaskKind::VoiceSummary => Prompt {
            system: Some(format!(
                "{}{}",
                templates::VOICE_SUMMARY_SYSTEM,
                voice_summary_prompt(VoiceSummaryStyle::parse_or_default(sub_type))
            )),
            instruction: format!("转录内容：\n\n{}", params.transcript.unwrap_or_default()),
        },
    }
}

/// Style-specific part of the book note system prompt
pub const fn book_note_prompt(style: BookNoteStyle) -> &'static str {
    match style {
        BookNoteStyle::Complete => templates::BOOK_NOTE_COMPLETE,
        BookNoteStyle::Keypoints => templates::BOOK_NOTE_KEYPOINTS,
        BookNoteStyle::Mindmap => templates::BOOK_NOTE_MINDMAP,
        BookNoteStyle::Actionable => templates::BOOK_NOTE_ACTIONABLE,
    }
}

/// Style-specific part of the voice summary system prompt
pub const fn voice_summary_prompt(style: VoiceSummaryStyle) -> &'static str {
    match style {
        VoiceSummaryStyle::Meeting => templates::VOICE_MEETING,
        VoiceSummaryStyle::Keypoints => templates::VOICE_KEYPOINTS,
        VoiceSummaryStyle::Todo => templates::VOICE_TODO,
        VoiceSummaryStyle::Decision => templates::VOICE_DECISION,
    }
}

/// Instruction sent alongside an audio block
pub const fn transcription_prompt(speaker_diarization: bool) -> &'static str {
    if speaker_diarization {
        templates::TRANSCRIBE_WITH_SPEAKERS
    } else {
        templates::TRANSCRIBE_PLAIN
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn summary_instruction(content: Option<&str>) -> String {
    match non_blank(content) {
        Some(content) => format!("请对以下文章进行摘要：\n\n{content}"),
        None => templates::SUMMARY_IMAGES_ONLY.to_owned(),
    }
}

fn keyword_instruction(keyword: &str, content: Option<&str>) -> String {
    // Whitespace-only content is passed through as-is; only a missing or
    // empty value is replaced with the pointer to the images.
    let content = content.filter(|c| !c.is_empty()).unwrap_or("（请查看图片内容）");

    formatdoc! {"
        请从以下内容中，完整提取所有与关键词\"{keyword}\"相关的内容片段。

        要求：
        1. 提取所有包含该关键词或与该关键词主题相关的完整段落、句子
        2. 如果图片中有相关内容，也要提取并描述
        3. 保持原文的完整性，不要省略或概括
        4. 按照在原文中出现的顺序排列
        5. 每个提取的片段用分隔线隔开
        6. 如果没有找到相关内容，请说明

        内容如下：
        {content}"}
}

fn book_note_instruction(params: &PromptParams<'_>) -> String {
    let mut text = String::new();

    if let Some(book_name) = non_blank(params.book_name) {
        text.push_str(&format!("书名：《{book_name}》\n\n"));
    }

    if let Some(content) = non_blank(params.content) {
        text.push_str(&format!("内容：\n{content}"));
    }

    if text.is_empty() && params.has_images {
        text.push_str(templates::BOOK_NOTE_IMAGES_ONLY);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_with_text_quotes_the_article() {
        let prompt = render(
            TaskKind::Summary,
            None,
            &PromptParams {
                content: Some("正文"),
                ..PromptParams::default()
            },
        );

        assert_eq!(prompt.instruction, "请对以下文章进行摘要：\n\n正文");
        assert!(prompt.system.unwrap().starts_with("你是一个专业的文章摘要助手。"));
    }

    #[test]
    fn summary_without_text_asks_about_images() {
        let prompt = render(
            TaskKind::Summary,
            None,
            &PromptParams {
                content: Some("   "),
                has_images: true,
                ..PromptParams::default()
            },
        );

        assert_eq!(prompt.instruction, "请对图片中的内容进行摘要，提取核心观点和关键信息。");
    }

    #[test]
    fn keyword_prompt_embeds_keyword_and_content() {
        let prompt = render(
            TaskKind::KeywordExtract,
            None,
            &PromptParams {
                content: Some("第一段"),
                keyword: Some("预算"),
                ..PromptParams::default()
            },
        );

        assert!(prompt.instruction.starts_with("请从以下内容中，完整提取所有与关键词\"预算\"相关的内容片段。\n\n要求：\n1."));
        assert!(prompt.instruction.ends_with("内容如下：\n第一段"));
    }

    #[test]
    fn keyword_prompt_points_at_images_when_content_missing() {
        let prompt = render(
            TaskKind::KeywordExtract,
            None,
            &PromptParams {
                keyword: Some("预算"),
                has_images: true,
                ..PromptParams::default()
            },
        );

        assert!(prompt.instruction.ends_with("内容如下：\n（请查看图片内容）"));
    }

    #[test]
    fn unknown_book_style_falls_back_to_complete() {
        let params = PromptParams {
            book_name: Some("三体"),
            ..PromptParams::default()
        };
        let unknown = render(TaskKind::BookNote, Some("poster"), &params);
        let absent = render(TaskKind::BookNote, None, &params);
        let complete = render(TaskKind::BookNote, Some("complete"), &params);

        assert_eq!(unknown, complete);
        assert_eq!(absent, complete);
        assert!(complete.system.unwrap().contains("请对这本书/内容进行完整总结"));
    }

    #[test]
    fn book_styles_select_distinct_prompts() {
        let params = PromptParams {
            content: Some("摘录"),
            ..PromptParams::default()
        };
        let mindmap = render(TaskKind::BookNote, Some("mindmap"), &params);
        let actionable = render(TaskKind::BookNote, Some("actionable"), &params);

        assert!(mindmap.system.as_deref().unwrap().contains("思维导图"));
        assert!(actionable.system.as_deref().unwrap().contains("30天行动计划建议"));
    }

    #[test]
    fn book_instruction_combines_name_and_content() {
        let prompt = render(
            TaskKind::BookNote,
            Some("keypoints"),
            &PromptParams {
                book_name: Some("活着"),
                content: Some("第一章"),
                ..PromptParams::default()
            },
        );

        assert_eq!(prompt.instruction, "书名：《活着》\n\n内容：\n第一章");
    }

    #[test]
    fn book_instruction_for_images_only() {
        let prompt = render(
            TaskKind::BookNote,
            None,
            &PromptParams {
                has_images: true,
                ..PromptParams::default()
            },
        );

        assert_eq!(prompt.instruction, "请根据图片中的书籍内容生成读书笔记。");
    }

    #[test]
    fn unknown_voice_style_falls_back_to_meeting() {
        let params = PromptParams {
            transcript: Some("【主持人】：开始"),
            ..PromptParams::default()
        };
        let prompt = render(TaskKind::VoiceSummary, Some("MEETING"), &params);

        assert_eq!(
            prompt.system.as_deref(),
            Some(format!("你是一个专业的语音内容分析助手。{}", voice_summary_prompt(VoiceSummaryStyle::Meeting)).as_str())
        );
        assert_eq!(prompt.instruction, "转录内容：\n\n【主持人】：开始");
    }

    #[test]
    fn transcription_prompt_depends_on_diarization() {
        let plain = render(TaskKind::Transcribe, None, &PromptParams::default());
        let speakers = render(
            TaskKind::Transcribe,
            None,
            &PromptParams {
                speaker_diarization: true,
                ..PromptParams::default()
            },
        );

        assert!(plain.system.is_none());
        assert!(plain.instruction.starts_with("请仔细听这段音频"));
        assert!(speakers.instruction.contains("【主持人】"));
        assert!(speakers.instruction.ends_with("请直接输出转录内容："));
    }

    #[test]
    fn pdf_prompt_has_no_system_message() {
        let prompt = render(TaskKind::PdfExtract, Some("ignored"), &PromptParams::default());
        assert!(prompt.system.is_none());
        assert!(prompt.instruction.starts_with("请提取这个PDF文档的全部文字内容"));
    }
}
