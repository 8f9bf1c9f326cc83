use std::collections::BTreeSet;

use lectern_config::TranscriptFilterConfig;

/// Stripped along with whitespace; models occasionally emit it around a reply
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Result of screening a raw transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptVerdict {
    /// Genuine speech; the raw text, untrimmed
    Valid(String),
    /// Not worth returning
    Invalid(Rejection),
}

/// Why a transcript was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing but whitespace
    Empty,
    /// A lone interjection such as breath noise
    Filler,
    /// The model said it heard no speech
    NoSpeech { phrase: String },
}

/// Separates transcripts from "no speech" refusals and filler utterances
///
/// Checks run in order: blank, filler-only, denylisted phrase. The filler
/// check applies to the text trimmed of whitespace and byte-order marks, the
/// denylist to the raw text, both case-sensitively.
#[derive(Debug, Clone)]
pub struct TranscriptFilter {
    denylist: Vec<String>,
    filler: BTreeSet<char>,
    max_filler_chars: usize,
}

impl TranscriptFilter {
    pub fn from_config(config: &TranscriptFilterConfig) -> Self {
        Self {
            denylist: config.denylist.iter().filter(|p| !p.is_empty()).cloned().collect(),
            filler: config.filler_syllables.chars().collect(),
            max_filler_chars: config.max_filler_chars,
        }
    }

    pub fn classify(&self, raw: &str) -> TranscriptVerdict {
        let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);

        if trimmed.is_empty() {
            return TranscriptVerdict::Invalid(Rejection::Empty);
        }

        if self.is_filler(trimmed) {
            return TranscriptVerdict::Invalid(Rejection::Filler);
        }

        if let Some(phrase) = self.denylist.iter().find(|phrase| raw.contains(phrase.as_str())) {
            return TranscriptVerdict::Invalid(Rejection::NoSpeech { phrase: phrase.clone() });
        }

        TranscriptVerdict::Valid(raw.to_owned())
    }

    fn is_filler(&self, trimmed: &str) -> bool {
        trimmed.chars().count() <= self.max_filler_chars && trimmed.chars().all(|c| self.filler.contains(&c))
    }
}

impl Default for TranscriptFilter {
    fn default() -> Self {
        Self::from_config(&TranscriptFilterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use lectern_config::{DEFAULT_DENYLIST, DEFAULT_FILLER_SYLLABLES};

    use super::*;

    fn classify(raw: &str) -> TranscriptVerdict {
        TranscriptFilter::default().classify(raw)
    }

    #[test]
    fn blank_input_is_invalid() {
        for raw in ["", " ", "\n\t  ", "\u{3000}", "\u{feff}", " \u{feff}\n"] {
            assert_eq!(classify(raw), TranscriptVerdict::Invalid(Rejection::Empty), "{raw:?}");
        }
    }

    #[test]
    fn single_filler_syllable_is_invalid() {
        assert_eq!(classify("嗯"), TranscriptVerdict::Invalid(Rejection::Filler));
        assert_eq!(classify("  啊\n"), TranscriptVerdict::Invalid(Rejection::Filler));
        assert_eq!(classify("\u{feff}嗯"), TranscriptVerdict::Invalid(Rejection::Filler));
    }

    #[test]
    fn every_short_filler_combination_is_invalid() {
        let syllables: Vec<char> = DEFAULT_FILLER_SYLLABLES.chars().collect();

        for &a in &syllables {
            assert_eq!(classify(&a.to_string()), TranscriptVerdict::Invalid(Rejection::Filler));
            for &b in &syllables {
                let pair: String = [a, b].iter().collect();
                assert_eq!(classify(&pair), TranscriptVerdict::Invalid(Rejection::Filler), "{pair}");
            }
        }
    }

    #[test]
    fn three_filler_syllables_pass() {
        assert_eq!(classify("嗯嗯嗯"), TranscriptVerdict::Valid("嗯嗯嗯".to_owned()));
    }

    #[test]
    fn short_non_filler_passes() {
        assert_eq!(classify("好的"), TranscriptVerdict::Valid("好的".to_owned()));
        assert_eq!(classify("嗯好"), TranscriptVerdict::Valid("嗯好".to_owned()));
    }

    #[test]
    fn denylisted_phrase_is_invalid() {
        assert_eq!(
            classify("这段音频没有语音内容"),
            TranscriptVerdict::Invalid(Rejection::NoSpeech {
                phrase: "这段音频没有语音内容".to_owned()
            })
        );
    }

    #[test]
    fn every_denylist_phrase_rejects_regardless_of_context() {
        for phrase in DEFAULT_DENYLIST {
            let raw = format!("大家好。{phrase}。谢谢");
            assert!(
                matches!(classify(&raw), TranscriptVerdict::Invalid(Rejection::NoSpeech { .. })),
                "{raw}"
            );
        }
    }

    #[test]
    fn denylist_match_is_case_sensitive() {
        assert!(matches!(
            classify("[Music]"),
            TranscriptVerdict::Invalid(Rejection::NoSpeech { .. })
        ));
        assert_eq!(classify("[music]"), TranscriptVerdict::Valid("[music]".to_owned()));
    }

    #[test]
    fn valid_transcript_is_returned_byte_identical() {
        let raw = "  大家好，欢迎收看节目\n";
        assert_eq!(classify(raw), TranscriptVerdict::Valid(raw.to_owned()));
        assert_eq!(
            classify("大家好，欢迎收看节目"),
            TranscriptVerdict::Valid("大家好，欢迎收看节目".to_owned())
        );
        assert_eq!(
            classify("\u{feff}大家好"),
            TranscriptVerdict::Valid("\u{feff}大家好".to_owned())
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let raw = "【主持人】：今天我们讨论预算。";
        let TranscriptVerdict::Valid(first) = classify(raw) else {
            panic!("expected a valid transcript");
        };
        assert_eq!(classify(&first), TranscriptVerdict::Valid(first.clone()));
    }

    #[test]
    fn tables_are_overridable() {
        let filter = TranscriptFilter::from_config(&TranscriptFilterConfig {
            denylist: vec!["[inaudible]".to_owned()],
            filler_syllables: "um".to_owned(),
            max_filler_chars: 3,
        });

        assert_eq!(filter.classify("umm"), TranscriptVerdict::Invalid(Rejection::Filler));
        assert!(matches!(
            filter.classify("well [inaudible] ok"),
            TranscriptVerdict::Invalid(Rejection::NoSpeech { .. })
        ));
        assert_eq!(
            filter.classify("没有声音"),
            TranscriptVerdict::Valid("没有声音".to_owned())
        );
        assert_eq!(filter.classify("嗯"), TranscriptVerdict::Valid("嗯".to_owned()));
    }
}
