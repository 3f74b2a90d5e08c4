//! Streaming zip extraction with entry-count progress reporting.
//!
//! # Architecture
//!
//! - `probe.rs` - up-front entry counting
//! - `sanitize.rs` - path sanitization (zip-slip prevention)
//! - `extract.rs` - the streaming extraction loop
//! - `entry.rs` / `options.rs` - shared types

pub use entry::{ArchiveReport, Entry, EntryKind};
pub use error::{Error, Result};
pub use extract::extract;
pub use options::{ExtractOptions, Progress};
pub use probe::count_entries;

pub mod entry;
mod error;
mod extract;
pub mod options;
mod probe;
mod sanitize;
