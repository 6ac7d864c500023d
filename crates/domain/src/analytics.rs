// crates/domain/src/analytics.rs
pub mod classification;
pub mod frequency;
pub mod lexical;
pub mod metrics;
pub mod readability;
pub mod segmentation;
pub mod sort;
pub mod timing;
pub mod tokenizer;

pub use classification::{LanguageGuess, Sentiment, SentimentLabel, analyze_sentiment, detect_language};
pub use frequency::{
    CharFrequency, FrequencyTable, WordFrequency, character_frequency, duplicate_words,
    most_frequent_words,
};
pub use lexical::{
    WordExtremes, average_sentence_length, average_word_length, average_words_per_paragraph,
    longest_and_shortest_words,
};
pub use metrics::{Metrics, compute_metrics, compute_metrics_with};
pub use readability::{
    ReadingLevel, count_syllables, count_syllables_in_word, flesch_reading_ease, reading_level,
};
pub use segmentation::{count_paragraphs, count_sentences};
pub use timing::{ReadingSpeed, TimeEstimate, TimeEstimates, estimate_time};
pub use tokenizer::{
    count_characters, count_characters_no_spaces, count_lines, count_unique_words, count_words,
    words,
};
