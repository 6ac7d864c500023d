use serde::Serialize;

use crate::{
    model::DocumentReport,
    value_objects::{CharCount, SentenceCount, WordCount},
};

/// Summary statistics over all analysed documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub documents: usize,
    pub words: WordCount,
    pub characters: CharCount,
    pub sentences: SentenceCount,
}

impl Summary {
    pub fn from_reports(reports: &[DocumentReport]) -> Self {
        reports.iter().fold(Self::default(), |acc, report| Self {
            documents: acc.documents + 1,
            words: acc.words + report.metrics.words,
            characters: acc.characters + report.metrics.characters,
            sentences: acc.sentences + report.metrics.sentences,
        })
    }
}
