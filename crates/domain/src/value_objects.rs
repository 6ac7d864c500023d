//! Value objects shared by the analytics engine.

pub use text_metrics_shared_kernel::value_objects::{
    CharCount, LineCount, ParagraphCount, SentenceCount, SyllableCount, WordCount,
};
