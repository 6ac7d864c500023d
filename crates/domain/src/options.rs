// crates/domain/src/options.rs
use std::num::NonZeroU32;

use text_metrics_shared_kernel::{DomainError, DomainResult};

use crate::analytics::timing::ReadingSpeed;

/// 最頻出単語の既定件数
pub const DEFAULT_TOP_WORDS: usize = 10;

/// 文字頻度の最大件数 (エンジン側の固定値)
pub const CHARACTER_FREQUENCY_LIMIT: usize = 50;

const MAX_TOP_WORDS: usize = 10_000;

/// Words-per-minute settings for the three time estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingSpeeds {
    pub reading: NonZeroU32,
    pub speaking: NonZeroU32,
    pub skimming: NonZeroU32,
}

impl Default for ReadingSpeeds {
    fn default() -> Self {
        Self {
            reading: ReadingSpeed::Reading.default_words_per_minute(),
            speaking: ReadingSpeed::Speaking.default_words_per_minute(),
            skimming: ReadingSpeed::Skimming.default_words_per_minute(),
        }
    }
}

/// エンジンの調整値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// `most_frequent_words` に渡す件数
    pub top_words: usize,
    pub speeds: ReadingSpeeds,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { top_words: DEFAULT_TOP_WORDS, speeds: ReadingSpeeds::default() }
    }
}

impl AnalysisOptions {
    #[must_use]
    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }

    #[must_use]
    pub fn with_speeds(mut self, speeds: ReadingSpeeds) -> Self {
        self.speeds = speeds;
        self
    }

    /// 件数の上限を検証する
    ///
    /// # Errors
    ///
    /// `top_words` が範囲外の場合に [`DomainError::RangeValidation`] を返します。
    pub fn validate(&self) -> DomainResult<()> {
        if self.top_words == 0 || self.top_words > MAX_TOP_WORDS {
            return Err(DomainError::RangeValidation {
                field: "top_words".to_string(),
                min: "1".to_string(),
                max: MAX_TOP_WORDS.to_string(),
            });
        }
        Ok(())
    }
}
