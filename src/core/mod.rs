//! Core scanning engine.
//!
//! ## Module Structure
//!
//! - `walker`: Directory traversal yielding candidate files
//! - `scanner`: Per-file, per-line Turkish text heuristics

pub mod scanner;
pub mod walker;

pub use scanner::{check_line, scan_file, scan_source};
pub use walker::TreeWalker;
