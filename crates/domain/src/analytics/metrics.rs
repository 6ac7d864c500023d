// crates/domain/src/analytics/metrics.rs
//! テキスト 1 件分の全指標

use serde::Serialize;

use super::{
    classification::{
        LanguageGuess, Sentiment, analyze_sentiment, detect_language, language_of, sentiment_of,
    },
    frequency::{CharFrequency, WordFrequency, character_frequency, duplicates_of, top_words_of, word_table},
    lexical::{average_sentence_length, average_token_length, average_words_per_paragraph, extremes_of},
    readability::{ReadingLevel, reading_ease_of, reading_level, syllables_of},
    segmentation::{count_paragraphs, count_sentences},
    timing::TimeEstimates,
    tokenizer::{count_characters, count_characters_no_spaces, count_lines, count_words, unique_count, words},
};
use crate::{
    options::AnalysisOptions,
    value_objects::{CharCount, LineCount, ParagraphCount, SentenceCount, SyllableCount, WordCount},
};

/// 入力テキストから算出した指標の集合
///
/// テキスト以外の識別子を持たず、入力が変わるたびに丸ごと再計算します。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub words: WordCount,
    pub characters: CharCount,
    pub characters_no_spaces: CharCount,
    pub sentences: SentenceCount,
    pub paragraphs: ParagraphCount,
    pub lines: LineCount,
    pub unique_words: WordCount,
    pub syllables: SyllableCount,
    pub time: TimeEstimates,
    pub average_word_length: f64,
    pub average_sentence_length: f64,
    pub average_words_per_paragraph: f64,
    pub longest_word: String,
    pub shortest_word: String,
    pub reading_ease: Option<u32>,
    pub reading_level: ReadingLevel,
    pub language: LanguageGuess,
    pub sentiment: Sentiment,
    pub top_words: Vec<WordFrequency>,
    pub character_frequency: Vec<CharFrequency>,
    pub duplicate_words: Vec<WordFrequency>,
}

/// 既定の設定で指標を算出する
#[must_use]
pub fn compute_metrics(text: &str) -> Metrics {
    compute_metrics_with(text, &AnalysisOptions::default())
}

/// Computes every metric for `text`, tokenizing it once.
#[must_use]
pub fn compute_metrics_with(text: &str, options: &AnalysisOptions) -> Metrics {
    let is_blank = text.trim().is_empty();
    let tokens = words(text);
    let table = word_table(&tokens);

    let words = count_words(text);
    let sentences = count_sentences(text);
    let syllables = syllables_of(&tokens);
    let reading_ease = reading_ease_of(words, sentences, syllables);
    let extremes = extremes_of(&tokens);

    let (language, sentiment) = if is_blank {
        (detect_language(text), analyze_sentiment(text))
    } else {
        (language_of(&tokens), sentiment_of(&tokens))
    };

    log::debug!(
        "computed metrics: {words} words, {sentences} sentences, {} distinct tokens",
        table.len()
    );

    Metrics {
        words,
        characters: count_characters(text),
        characters_no_spaces: count_characters_no_spaces(text),
        sentences,
        paragraphs: count_paragraphs(text),
        lines: count_lines(text),
        unique_words: unique_count(&tokens),
        syllables,
        time: TimeEstimates::for_words(words, &options.speeds),
        average_word_length: average_token_length(&tokens),
        average_sentence_length: average_sentence_length(text),
        average_words_per_paragraph: average_words_per_paragraph(text),
        longest_word: extremes.longest,
        shortest_word: extremes.shortest,
        reading_ease,
        reading_level: reading_level(reading_ease),
        language,
        sentiment,
        top_words: top_words_of(&table, options.top_words),
        character_frequency: character_frequency(text),
        duplicate_words: duplicates_of(&table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{
        SentimentLabel, TimeEstimate, flesch_reading_ease, longest_and_shortest_words,
        most_frequent_words,
    };

    #[test]
    fn empty_text_is_the_zero_case() {
        let metrics = compute_metrics("");
        assert_eq!(metrics.words, 0usize);
        assert_eq!(metrics.characters, 0usize);
        assert_eq!(metrics.sentences, 0usize);
        assert_eq!(metrics.paragraphs, 0usize);
        assert_eq!(metrics.lines, 0usize);
        assert_eq!(metrics.reading_ease, None);
        assert_eq!(metrics.reading_level.label(), "-");
        assert_eq!(metrics.language.label(), "-");
        assert_eq!(metrics.sentiment.score, 0.0);
        assert_eq!(metrics.sentiment.label, SentimentLabel::Unavailable);
        assert_eq!(metrics.longest_word, "-");
        assert_eq!(metrics.shortest_word, "-");
        assert_eq!(metrics.time.reading, TimeEstimate::UnderOneMinute);
        assert!(metrics.top_words.is_empty());
        assert!(metrics.character_frequency.is_empty());
        assert!(metrics.duplicate_words.is_empty());
    }

    #[test]
    fn cat_example() {
        let metrics = compute_metrics("The cat sat. The cat ran!");
        assert_eq!(metrics.words, 6usize);
        assert_eq!(metrics.sentences, 2usize);
        assert_eq!(metrics.paragraphs, 1usize);
        assert_eq!(metrics.unique_words, 4usize);
        assert_eq!(metrics.top_words[0], WordFrequency { word: "the".into(), count: 2 });
        assert_eq!(metrics.top_words[1].word, "cat");
    }

    #[test]
    fn shared_tokenization_matches_standalone_functions() {
        let text = "Reading is a wonderful habit.\n\nIt makes the mind sharp, and it is fun!";
        let metrics = compute_metrics(text);
        let extremes = longest_and_shortest_words(text);
        assert_eq!(metrics.longest_word, extremes.longest);
        assert_eq!(metrics.shortest_word, extremes.shortest);
        assert_eq!(metrics.reading_ease, flesch_reading_ease(text));
        assert_eq!(metrics.language, detect_language(text));
        assert_eq!(metrics.sentiment, analyze_sentiment(text));
        assert_eq!(metrics.top_words, most_frequent_words(text, 10));
        assert_eq!(metrics.paragraphs, 2usize);
    }

    #[test]
    fn punctuation_only_text_keeps_classifier_semantics() {
        let metrics = compute_metrics("?!");
        assert_eq!(metrics.words, 1usize);
        assert_eq!(metrics.reading_ease, None);
        assert_eq!(metrics.language.label(), "English (likely)");
        assert_eq!(metrics.sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn options_drive_top_words() {
        let options = AnalysisOptions::default().with_top_words(1);
        let metrics = compute_metrics_with("b a b a c", &options);
        assert_eq!(metrics.top_words.len(), 1);
        assert_eq!(metrics.top_words[0].word, "b");
    }

    #[test]
    fn computation_is_idempotent() {
        let text = "Same input. Same output!\n\nAlways.";
        assert_eq!(compute_metrics(text), compute_metrics(text));
    }

    #[test]
    fn serializes_labels_as_strings() {
        let json = serde_json::to_value(compute_metrics("Good day.")).unwrap();
        assert_eq!(json["words"], 2);
        assert_eq!(json["sentiment"]["label"], "Positive");
        assert_eq!(json["time"]["reading"], "< 1 min");
        assert_eq!(json["reading_level"], "5th Grade");
    }
}
