// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{io::Write, process::ExitCode};

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use text_metrics::{app, args::Args, config::Config};

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // RUST_LOG が設定されていればそちらを優先
    Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbosity());

    let result = Config::try_from(args).map_err(anyhow::Error::from).and_then(|config| app::run(&config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
