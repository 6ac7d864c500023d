//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`source`]: Loading text from files, stdin or inline arguments
//! - [`presenter`]: Rendering analysed documents
//! - [`progress`]: Progress reporting while analysing several inputs
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod presenter;
pub mod progress;
pub mod source;
