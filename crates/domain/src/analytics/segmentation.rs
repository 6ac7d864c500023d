// crates/domain/src/analytics/segmentation.rs
//! 文と段落の分割

use std::sync::OnceLock;

use regex::Regex;

use crate::value_objects::{ParagraphCount, SentenceCount};

fn sentence_terminators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"))
}

fn paragraph_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"))
}

fn non_blank_segments(pattern: &Regex, text: &str) -> usize {
    pattern.split(text).filter(|segment| !segment.trim().is_empty()).count()
}

/// `.`, `!`, `?` の連続で区切った空でない区間数
#[must_use]
pub fn count_sentences(text: &str) -> SentenceCount {
    SentenceCount::new(non_blank_segments(sentence_terminators(), text))
}

/// 空行で区切った空でない区間数
///
/// 区切りのない非空テキストは 1 段落として扱います。
#[must_use]
pub fn count_paragraphs(text: &str) -> ParagraphCount {
    if text.trim().is_empty() {
        return ParagraphCount::zero();
    }
    let paragraphs = non_blank_segments(paragraph_separator(), text);
    ParagraphCount::new(paragraphs.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_split_on_terminator_runs() {
        assert_eq!(count_sentences("The cat sat. The cat ran!"), 2usize);
        assert_eq!(count_sentences("Wait... what?! Really"), 3usize);
        assert_eq!(count_sentences("no terminator at all"), 1usize);
    }

    #[test]
    fn sentences_ignore_blank_segments() {
        assert_eq!(count_sentences(""), 0usize);
        assert_eq!(count_sentences("..."), 0usize);
        assert_eq!(count_sentences(" . ! ? "), 0usize);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        assert_eq!(count_paragraphs("first\n\nsecond"), 2usize);
        assert_eq!(count_paragraphs("first\n  \t\nsecond\n\n\nthird"), 3usize);
    }

    #[test]
    fn single_line_breaks_do_not_split_paragraphs() {
        assert_eq!(count_paragraphs("line one\nline two"), 1usize);
    }

    #[test]
    fn paragraphs_of_empty_text_are_zero() {
        assert_eq!(count_paragraphs(""), 0usize);
        assert_eq!(count_paragraphs("\n\n  \n"), 0usize);
    }

    #[test]
    fn surrounding_blank_lines_are_not_paragraphs() {
        assert_eq!(count_paragraphs("\n\nonly one\n\n"), 1usize);
    }
}
