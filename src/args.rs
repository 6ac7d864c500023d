// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, ValueEnum, ValueHint};
use text_metrics_infra::output::OutputFormat;

use crate::parsers;

#[derive(Parser, Debug)]
#[command(
    name = "text_metrics",
    version,
    about = "テキスト統計ツール (単語数/読了時間/可読性/頻度分析)",
    group(
        clap::ArgGroup::new("input_source")
            .args(&["files", "text"])
            .multiple(false)
    )
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// 解析するテキスト (ファイルの代わりに指定)
    #[arg(long, help_heading = "入力")]
    pub text: Option<String>,

    /// 対象ファイル (`-` または省略で標準入力)
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub files: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Json,
    Yaml,
    Md,
    Jsonl,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => Self::Table,
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Md => Self::Md,
            CliOutputFormat::Jsonl => Self::Jsonl,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(short = 'f', long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 重複単語の表示件数
    #[arg(long, default_value_t = 20, help_heading = "出力")]
    pub duplicates: usize,

    /// 文字頻度の表示件数
    #[arg(long = "chars", default_value_t = 50, help_heading = "出力")]
    pub chars: usize,

    /// 出力先ファイル (一時ファイル経由で置き換え)
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct AnalysisArgs {
    /// 最頻出単語の件数
    #[arg(long, default_value_t = 10, value_parser = parsers::parse_positive_usize, help_heading = "解析")]
    pub top: usize,

    /// 黙読速度 (words per minute)
    #[arg(long, default_value_t = 200, value_parser = parsers::parse_wpm, help_heading = "解析")]
    pub reading_wpm: u32,

    /// 音読速度 (words per minute)
    #[arg(long, default_value_t = 150, value_parser = parsers::parse_wpm, help_heading = "解析")]
    pub speaking_wpm: u32,

    /// 流し読み速度 (words per minute)
    #[arg(long, default_value_t = 400, value_parser = parsers::parse_wpm, help_heading = "解析")]
    pub skimming_wpm: u32,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 入力ファイルの変更を監視して再計算
    #[arg(short = 'w', long, help_heading = "動作")]
    pub watch: bool,

    /// 監視のデバウンス間隔 (ミリ秒)
    #[arg(long, default_value_t = 300, value_parser = parsers::parse_interval_ms, help_heading = "動作")]
    pub watch_interval: u64,

    /// 並列ワーカー数 (既定: CPU 数)
    #[arg(short = 'j', long, help_heading = "動作")]
    pub jobs: Option<usize>,

    /// 読み込めない入力があれば即座に失敗する
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// ログを詳しくする (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "動作")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short = 'q', long, help_heading = "動作")]
    pub quiet: bool,
}

impl Args {
    /// 0 = quiet, 1 = default, 2 = -v, 3+ = -vv
    pub const fn verbosity(&self) -> u8 {
        if self.behavior.quiet { 0 } else { self.behavior.verbose.saturating_add(1) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["text_metrics"]).unwrap();
        assert!(args.files.is_empty());
        assert!(args.text.is_none());
        assert_eq!(args.analysis.top, 10);
        assert_eq!(args.output.duplicates, 20);
        assert_eq!(args.output.chars, 50);
        assert_eq!(args.behavior.watch_interval, 300);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn text_and_files_are_exclusive() {
        assert!(Args::try_parse_from(["text_metrics", "--text", "hi", "a.txt"]).is_err());
    }

    #[test]
    fn verbosity_flags() {
        let args = Args::try_parse_from(["text_metrics", "-vv"]).unwrap();
        assert_eq!(args.verbosity(), 3);
        let args = Args::try_parse_from(["text_metrics", "-q"]).unwrap();
        assert_eq!(args.verbosity(), 0);
        assert!(Args::try_parse_from(["text_metrics", "-q", "-v"]).is_err());
    }

    #[test]
    fn top_must_be_positive() {
        assert!(Args::try_parse_from(["text_metrics", "--top", "0"]).is_err());
    }
}
