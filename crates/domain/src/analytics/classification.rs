// crates/domain/src/analytics/classification.rs
//! 言語判定と感情分析の簡易ヒューリスティック
//!
//! いずれも固定語彙との完全一致のみで判定します (語幹処理・否定の考慮なし)。

use std::fmt;

use serde::{Serialize, Serializer};

use super::{lexical::PLACEHOLDER, tokenizer::words};

/// 言語判定に使う先頭トークン数
pub const LANGUAGE_SAMPLE_SIZE: usize = 50;

const ENGLISH_RATIO_THRESHOLD: f64 = 0.2;
const SENTIMENT_THRESHOLD: f64 = 20.0;

pub const ENGLISH_COMMON_WORDS: [&str; 20] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at",
];

pub const POSITIVE_WORDS: [&str; 20] = [
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "happy", "best",
    "awesome", "beautiful", "perfect", "brilliant", "outstanding", "superb", "nice", "positive",
    "joy", "pleased", "delightful",
];

pub const NEGATIVE_WORDS: [&str; 20] = [
    "bad", "terrible", "awful", "horrible", "worst", "hate", "sad", "poor", "ugly", "negative",
    "angry", "disappointing", "disappointed", "fail", "failure", "wrong", "painful", "annoying",
    "boring", "dreadful",
];

fn matches_in(tokens: &[String], vocabulary: &[&str]) -> usize {
    tokens.iter().filter(|token| vocabulary.contains(&token.as_str())).count()
}

/// 言語判定の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageGuess {
    English,
    LikelyEnglish,
    Unavailable,
}

impl LanguageGuess {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::LikelyEnglish => "English (likely)",
            Self::Unavailable => PLACEHOLDER,
        }
    }
}

impl fmt::Display for LanguageGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for LanguageGuess {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// 先頭 50 トークン中の頻出英単語の割合で判定する
///
/// 割合が 0.2 を超えれば `English`、それ以外 (トークンなしを含む) は
/// `English (likely)`。
#[must_use]
pub fn detect_language(text: &str) -> LanguageGuess {
    if text.trim().is_empty() {
        return LanguageGuess::Unavailable;
    }
    language_of(&words(text))
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn language_of(tokens: &[String]) -> LanguageGuess {
    let sample = &tokens[..tokens.len().min(LANGUAGE_SAMPLE_SIZE)];
    if sample.is_empty() {
        return LanguageGuess::LikelyEnglish;
    }
    let ratio = matches_in(sample, &ENGLISH_COMMON_WORDS) as f64 / sample.len() as f64;
    if ratio > ENGLISH_RATIO_THRESHOLD {
        LanguageGuess::English
    } else {
        LanguageGuess::LikelyEnglish
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Unavailable,
}

impl SentimentLabel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Unavailable => PLACEHOLDER,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for SentimentLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// 感情スコア (-100〜100) とラベル
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    pub score: f64,
    pub label: SentimentLabel,
}

impl Sentiment {
    const UNAVAILABLE: Self = Self { score: 0.0, label: SentimentLabel::Unavailable };
    const NEUTRAL: Self = Self { score: 0.0, label: SentimentLabel::Neutral };
}

#[must_use]
pub fn analyze_sentiment(text: &str) -> Sentiment {
    if text.trim().is_empty() {
        return Sentiment::UNAVAILABLE;
    }
    sentiment_of(&words(text))
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn sentiment_of(tokens: &[String]) -> Sentiment {
    let positive = matches_in(tokens, &POSITIVE_WORDS);
    let negative = matches_in(tokens, &NEGATIVE_WORDS);
    if positive == 0 && negative == 0 {
        return Sentiment::NEUTRAL;
    }
    let score = (positive as f64 - negative as f64) / (positive + negative) as f64 * 100.0;
    let label = if score > SENTIMENT_THRESHOLD {
        SentimentLabel::Positive
    } else if score < -SENTIMENT_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };
    Sentiment { score, label }
}
