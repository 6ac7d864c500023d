use serde::Serialize;

use crate::{
    analytics::{Metrics, compute_metrics_with},
    options::AnalysisOptions,
};

/// 入力 1 件分のレポート
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    /// 入力元の表示名 (ファイルパス, `<stdin>`, `<text>`)
    pub source: String,
    pub metrics: Metrics,
}

impl DocumentReport {
    #[must_use]
    pub fn new(source: impl Into<String>, metrics: Metrics) -> Self {
        Self { source: source.into(), metrics }
    }

    /// テキストを解析してレポートを作る
    #[must_use]
    pub fn analyze(source: impl Into<String>, text: &str, options: &AnalysisOptions) -> Self {
        Self::new(source, compute_metrics_with(text, options))
    }
}
