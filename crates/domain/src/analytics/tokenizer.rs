// crates/domain/src/analytics/tokenizer.rs
//! 単語・文字・行の計数

use std::{collections::HashSet, sync::OnceLock};

use regex::Regex;

use crate::value_objects::{CharCount, LineCount, WordCount};

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// 空白区切りの断片数を数える
#[must_use]
pub fn count_words(text: &str) -> WordCount {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return WordCount::zero();
    }
    WordCount::new(trimmed.split_whitespace().count())
}

/// 小文字化したテキストから `\w+` に一致するトークンを出現順に取り出す
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// 空白を含む文字数
#[must_use]
pub fn count_characters(text: &str) -> CharCount {
    CharCount::new(text.chars().count())
}

/// 空白を除いた文字数
#[must_use]
pub fn count_characters_no_spaces(text: &str) -> CharCount {
    CharCount::new(text.chars().filter(|c| !c.is_whitespace()).count())
}

#[must_use]
pub fn count_unique_words(text: &str) -> WordCount {
    unique_count(&words(text))
}

pub(crate) fn unique_count(tokens: &[String]) -> WordCount {
    let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    WordCount::new(unique.len())
}

/// 改行で区切った区間数
///
/// 末尾の改行は空の区間を一つ追加します (`"a\n"` は 2 行)。
#[must_use]
pub fn count_lines(text: &str) -> LineCount {
    if text.trim().is_empty() {
        return LineCount::zero();
    }
    LineCount::new(text.split('\n').count())
}
