// src/config.rs
use std::{num::NonZeroU32, path::PathBuf, time::Duration};

use text_metrics_domain::options::{AnalysisOptions, ReadingSpeeds};
use text_metrics_infra::output::{DisplayLimits, OutputFormat};
use text_metrics_ports::source::TextInput;
use text_metrics_shared_kernel::PresentationError;

use crate::args::Args;

/// Validated runtime configuration derived from [`Args`].
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<TextInput>,
    pub options: AnalysisOptions,
    pub limits: DisplayLimits,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    /// Debounce interval when watching, `None` for a single run.
    pub watch: Option<Duration>,
    pub jobs: usize,
    pub strict: bool,
}

impl Config {
    /// Files to watch (inline text and stdin are excluded).
    pub fn watch_paths(&self) -> Vec<PathBuf> {
        self.inputs.iter().filter_map(TextInput::watch_path).cloned().collect()
    }
}

fn wpm(flag: &str, value: u32) -> Result<NonZeroU32, PresentationError> {
    NonZeroU32::new(value).ok_or_else(|| PresentationError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
        reason: "words per minute must be greater than zero".to_string(),
    })
}

fn inputs_from(args: &Args) -> Vec<TextInput> {
    if let Some(text) = &args.text {
        return vec![TextInput::Inline(text.clone())];
    }
    if args.files.is_empty() {
        return vec![TextInput::Stdin];
    }
    // stdin は一度しか読めないので `-` の重複はまとめる
    let mut seen_stdin = false;
    args.files
        .iter()
        .filter_map(|path| {
            if path.as_os_str() != "-" {
                return Some(TextInput::File(path.clone()));
            }
            if seen_stdin {
                return None;
            }
            seen_stdin = true;
            Some(TextInput::Stdin)
        })
        .collect()
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let speeds = ReadingSpeeds {
            reading: wpm("--reading-wpm", args.analysis.reading_wpm)?,
            speaking: wpm("--speaking-wpm", args.analysis.speaking_wpm)?,
            skimming: wpm("--skimming-wpm", args.analysis.skimming_wpm)?,
        };
        let options = AnalysisOptions::default().with_top_words(args.analysis.top).with_speeds(speeds);
        options.validate().map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()))?;

        let jobs = match args.behavior.jobs {
            Some(0) => {
                return Err(PresentationError::InvalidValue {
                    flag: "--jobs".to_string(),
                    value: "0".to_string(),
                    reason: "at least one worker is required".to_string(),
                });
            }
            Some(jobs) => jobs,
            None => num_cpus::get().max(1),
        };

        let inputs = inputs_from(&args);
        let watch = if args.behavior.watch {
            if let Some(unwatchable) = inputs.iter().find(|input| input.watch_path().is_none()) {
                return Err(PresentationError::ConfigBuildFailed(format!(
                    "--watch needs file inputs; {unwatchable} cannot be watched"
                )));
            }
            Some(Duration::from_millis(args.behavior.watch_interval))
        } else {
            None
        };

        Ok(Self {
            inputs,
            options,
            limits: DisplayLimits { duplicates: args.output.duplicates, characters: args.output.chars },
            format: args.output.format.into(),
            output: args.output.output,
            watch,
            jobs,
            strict: args.behavior.strict,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn config(argv: &[&str]) -> Result<Config, PresentationError> {
        let mut full = vec!["text_metrics"];
        full.extend_from_slice(argv);
        Config::try_from(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn no_inputs_read_stdin() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.inputs, vec![TextInput::Stdin]);
        assert_eq!(cfg.options, AnalysisOptions::default());
        assert!(cfg.jobs >= 1);
        assert!(cfg.watch.is_none());
    }

    #[test]
    fn dash_means_stdin() {
        let cfg = config(&["a.txt", "-"]).unwrap();
        assert_eq!(cfg.inputs, vec![TextInput::File("a.txt".into()), TextInput::Stdin]);
        assert_eq!(cfg.watch_paths(), vec![PathBuf::from("a.txt")]);
    }

    #[test]
    fn repeated_dash_reads_stdin_once() {
        let cfg = config(&["-", "a.txt", "-"]).unwrap();
        assert_eq!(cfg.inputs, vec![TextInput::Stdin, TextInput::File("a.txt".into())]);
    }

    #[test]
    fn zero_wpm_is_rejected() {
        let err = config(&["--reading-wpm", "0"]).unwrap_err();
        assert!(matches!(err, PresentationError::InvalidValue { ref flag, .. } if flag == "--reading-wpm"));
    }

    #[test]
    fn zero_jobs_is_rejected() {
        assert!(matches!(config(&["-j", "0"]), Err(PresentationError::InvalidValue { .. })));
        assert_eq!(config(&["-j", "3"]).unwrap().jobs, 3);
    }

    #[test]
    fn watch_requires_files() {
        assert!(config(&["--watch", "--text", "hello"]).is_err());
        assert!(config(&["--watch"]).is_err());
        let cfg = config(&["--watch", "--watch-interval", "50", "notes.txt"]).unwrap();
        assert_eq!(cfg.watch, Some(Duration::from_millis(50)));
    }

    #[test]
    fn custom_speeds_and_limits() {
        let cfg = config(&["--speaking-wpm", "120", "--duplicates", "0", "--chars", "5", "-f", "json"]).unwrap();
        assert_eq!(cfg.options.speeds.speaking.get(), 120);
        assert_eq!(cfg.limits, DisplayLimits { duplicates: 0, characters: 5 });
        assert_eq!(cfg.format, OutputFormat::Json);
    }
}
