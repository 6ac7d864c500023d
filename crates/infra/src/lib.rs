// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod output;
pub mod persistence;
pub mod progress;
pub mod source;
pub mod watch;
