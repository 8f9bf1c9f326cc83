use serde::Deserialize;

/// Phrases the upstream model emits instead of a transcript when it hears no speech
pub const DEFAULT_DENYLIST: &[&str] = &[
    "[无语音内容]",
    "没有语音信息",
    "无语音信息",
    "这段音频没有语音内容",
    "没有听到语音内容",
    "无法识别",
    "没有可辨识",
    "无法听到",
    "听不到任何",
    "没有声音",
    "音频为空",
    "无音频",
    "[Music]",
    "[音乐]",
    "音频中没有",
    "无法从音频",
    "音频内容为空",
    "没有检测到",
];

/// Interjections transcribed from breath or background noise
pub const DEFAULT_FILLER_SYLLABLES: &str = "嗯啊哦呃哈嘿唔";

/// Tables driving the transcript validity filter
///
/// Matching is case-sensitive substring containment against the raw
/// transcript. The defaults target a Chinese-language deployment.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptFilterConfig {
    /// Phrases meaning "no speech detected"
    #[serde(default = "default_denylist")]
    pub denylist: Vec<String>,
    /// Every character of this string is a filler syllable
    #[serde(default = "default_filler_syllables")]
    pub filler_syllables: String,
    /// Longest transcript, in characters, that can be rejected as filler
    #[serde(default = "default_max_filler_chars")]
    pub max_filler_chars: usize,
}

impl Default for TranscriptFilterConfig {
    fn default() -> Self {
        Self {
            denylist: default_denylist(),
            filler_syllables: default_filler_syllables(),
            max_filler_chars: default_max_filler_chars(),
        }
    }
}

fn default_denylist() -> Vec<String> {
    DEFAULT_DENYLIST.iter().map(|&phrase| phrase.to_owned()).collect()
}

fn default_filler_syllables() -> String {
    DEFAULT_FILLER_SYLLABLES.to_owned()
}

const fn default_max_filler_chars() -> usize {
    2
}
