// 依存関係の推移的依存により複数のバージョンが混在するための抑制
// windows-sys: notify(0.52) vs clap(0.59)
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod parsers;
