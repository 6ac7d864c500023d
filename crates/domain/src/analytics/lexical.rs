// crates/domain/src/analytics/lexical.rs
//! 平均長・最長語・最短語

use serde::Serialize;

use super::{
    segmentation::{count_paragraphs, count_sentences},
    sort::{SortOrder, first_after_stable_sort},
    tokenizer::{count_words, words},
};

/// 表示用プレースホルダー
pub const PLACEHOLDER: &str = "-";

/// 小数第 1 位で丸める
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 { 0.0 } else { round_to_tenth(numerator / denominator) }
}

#[must_use]
pub fn average_word_length(text: &str) -> f64 {
    average_token_length(&words(text))
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn average_token_length(tokens: &[String]) -> f64 {
    let total: usize = tokens.iter().map(|t| t.chars().count()).sum();
    ratio(total as f64, tokens.len() as f64)
}

/// 単語数 / 文数
#[must_use]
pub fn average_sentence_length(text: &str) -> f64 {
    ratio(count_words(text).as_f64(), count_sentences(text).as_f64())
}

/// 単語数 / 段落数
#[must_use]
pub fn average_words_per_paragraph(text: &str) -> f64 {
    ratio(count_words(text).as_f64(), count_paragraphs(text).as_f64())
}

/// 最長語と最短語
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordExtremes {
    pub longest: String,
    pub shortest: String,
}

impl WordExtremes {
    fn placeholder() -> Self {
        Self { longest: PLACEHOLDER.to_string(), shortest: PLACEHOLDER.to_string() }
    }
}

/// 同じ長さの語が複数ある場合は先に出現した語を採用します。
#[must_use]
pub fn longest_and_shortest_words(text: &str) -> WordExtremes {
    extremes_of(&words(text))
}

pub(crate) fn extremes_of(tokens: &[String]) -> WordExtremes {
    let length = |token: &String| token.chars().count();
    let longest = first_after_stable_sort(tokens, SortOrder::Descending, length);
    let shortest = first_after_stable_sort(tokens, SortOrder::Ascending, length);
    match (longest, shortest) {
        (Some(longest), Some(shortest)) => {
            WordExtremes { longest: longest.clone(), shortest: shortest.clone() }
        }
        _ => WordExtremes::placeholder(),
    }
}
