// crates/domain/src/analytics/readability.rs
//! 音節の推定と Flesch Reading Ease

use std::{fmt, sync::OnceLock};

use regex::Regex;
use serde::{Serialize, Serializer};

use super::{
    lexical::PLACEHOLDER,
    segmentation::count_sentences,
    tokenizer::{count_words, words},
};
use crate::value_objects::{SentenceCount, SyllableCount, WordCount};

fn silent_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("suffix pattern is valid"))
}

fn vowel_group() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[aeiouy]{1,2}").expect("vowel pattern is valid"))
}

/// 英単語の音節数をおおまかに推定する
///
/// 3 文字以下は 1 音節。語末の無音 `e`/`es`/`ed` と語頭の `y` を除いた上で
/// 母音の連なり (最大 2 文字ずつ) を数え、最低 1 音節とします。
#[must_use]
pub fn count_syllables_in_word(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }
    let stripped = silent_suffix().replace(&word, "");
    let stripped = stripped.strip_prefix('y').unwrap_or(&stripped);
    vowel_group().find_iter(stripped).count().max(1)
}

#[must_use]
pub fn count_syllables(text: &str) -> SyllableCount {
    syllables_of(&words(text))
}

pub(crate) fn syllables_of(tokens: &[String]) -> SyllableCount {
    tokens.iter().map(|token| count_syllables_in_word(token)).sum()
}

/// 0〜100 に丸めた Flesch Reading Ease
///
/// 文または単語がない場合は `None`。
#[must_use]
pub fn flesch_reading_ease(text: &str) -> Option<u32> {
    let words = count_words(text);
    let sentences = count_sentences(text);
    if words.is_zero() || sentences.is_zero() {
        return None;
    }
    reading_ease_of(words, sentences, count_syllables(text))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn reading_ease_of(
    words: WordCount,
    sentences: SentenceCount,
    syllables: SyllableCount,
) -> Option<u32> {
    if words.is_zero() || sentences.is_zero() {
        return None;
    }
    let words_per_sentence = words.as_f64() / sentences.as_f64();
    let syllables_per_word = syllables.as_f64() / words.as_f64();
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    Some(score.clamp(0.0, 100.0).round() as u32)
}

/// 学年換算の可読性ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingLevel {
    FifthGrade,
    SixthGrade,
    SeventhGrade,
    EighthToNinthGrade,
    TenthToTwelfthGrade,
    College,
    CollegeGraduate,
    Unavailable,
}

impl ReadingLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FifthGrade => "5th Grade",
            Self::SixthGrade => "6th Grade",
            Self::SeventhGrade => "7th Grade",
            Self::EighthToNinthGrade => "8th-9th Grade",
            Self::TenthToTwelfthGrade => "10th-12th Grade",
            Self::College => "College",
            Self::CollegeGraduate => "College Graduate",
            Self::Unavailable => PLACEHOLDER,
        }
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ReadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// スコアの下限しきい値を高い順に判定する
#[must_use]
pub const fn reading_level(score: Option<u32>) -> ReadingLevel {
    match score {
        None => ReadingLevel::Unavailable,
        Some(90..) => ReadingLevel::FifthGrade,
        Some(80..) => ReadingLevel::SixthGrade,
        Some(70..) => ReadingLevel::SeventhGrade,
        Some(60..) => ReadingLevel::EighthToNinthGrade,
        Some(50..) => ReadingLevel::TenthToTwelfthGrade,
        Some(30..) => ReadingLevel::College,
        Some(_) => ReadingLevel::CollegeGraduate,
    }
}
