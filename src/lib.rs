//! turkscan - find leftover Turkish text in a source tree
//!
//! turkscan walks a project, reads every script, markup and style file, and
//! reports lines whose comments or console/throw/echo strings contain
//! Turkish-specific letters, so they can be localized or removed before a
//! release.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Tree walker and line scanner
//! - `issues`: Finding and per-file scan result types
//! - `utils`: The Turkish character test

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
