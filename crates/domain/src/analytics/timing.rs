// crates/domain/src/analytics/timing.rs
//! 読了・音読・流し読み時間の見積もり

use std::{fmt, num::NonZeroU32};

use serde::{Serialize, Serializer};

use crate::{options::ReadingSpeeds, value_objects::WordCount};

/// 読み方ごとの既定速度 (words per minute)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingSpeed {
    Reading,
    Speaking,
    Skimming,
}

impl ReadingSpeed {
    pub const ALL: [Self; 3] = [Self::Reading, Self::Speaking, Self::Skimming];

    #[must_use]
    pub const fn default_words_per_minute(self) -> NonZeroU32 {
        let wpm = match self {
            Self::Reading => NonZeroU32::new(200),
            Self::Speaking => NonZeroU32::new(150),
            Self::Skimming => NonZeroU32::new(400),
        };
        wpm.unwrap()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reading => "Reading",
            Self::Speaking => "Speaking",
            Self::Skimming => "Skimming",
        }
    }
}

/// 所要時間の表示ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEstimate {
    /// `"< 1 min"`
    UnderOneMinute,
    /// `"1 min"` (1 分以上 2 分未満をすべて含む)
    OneMinute,
    /// `"{n} min"` (切り上げ, n >= 2)
    Minutes(u64),
}

impl fmt::Display for TimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnderOneMinute => f.write_str("< 1 min"),
            Self::OneMinute => f.write_str("1 min"),
            Self::Minutes(n) => write!(f, "{n} min"),
        }
    }
}

impl Serialize for TimeEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 単語数と速度から所要時間ラベルを決める
///
/// `[1, 2)` 分は切り上げずに `"1 min"` へまとめます。
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_time(word_count: WordCount, words_per_minute: NonZeroU32) -> TimeEstimate {
    let minutes = word_count.as_f64() / f64::from(words_per_minute.get());
    if minutes < 1.0 {
        TimeEstimate::UnderOneMinute
    } else if minutes < 2.0 {
        TimeEstimate::OneMinute
    } else {
        TimeEstimate::Minutes(minutes.ceil() as u64)
    }
}

/// 3 種類の速度での見積もり
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeEstimates {
    pub reading: TimeEstimate,
    pub speaking: TimeEstimate,
    pub skimming: TimeEstimate,
}

impl TimeEstimates {
    #[must_use]
    pub fn for_words(word_count: WordCount, speeds: &ReadingSpeeds) -> Self {
        Self {
            reading: estimate_time(word_count, speeds.reading),
            speaking: estimate_time(word_count, speeds.speaking),
            skimming: estimate_time(word_count, speeds.skimming),
        }
    }

    #[must_use]
    pub const fn get(&self, speed: ReadingSpeed) -> TimeEstimate {
        match speed {
            ReadingSpeed::Reading => self.reading,
            ReadingSpeed::Speaking => self.speaking,
            ReadingSpeed::Skimming => self.skimming,
        }
    }
}
