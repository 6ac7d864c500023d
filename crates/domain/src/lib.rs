//! # Domain
//!
//! テキスト統計エンジン本体。
//!
//! - [`analytics`]: 計数・読了時間・可読性・分類・頻度分析の純粋関数群
//! - [`model`]: 入力ごとのレポートと集計
//! - [`options`]: エンジンの調整値
//!
//! すべての関数は副作用を持たず、同じ入力に対して常に同じ結果を返します。

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod options;
pub mod value_objects;

pub use analytics::{Metrics, compute_metrics, compute_metrics_with};
pub use options::{AnalysisOptions, ReadingSpeeds};
