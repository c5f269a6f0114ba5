//! Cassette Upload Pipeline
//!
//! This crate turns user-selected files into Durable Store entries.
//!
//! # Features
//!
//! - Readiness gate: uploads are refused until the store is attached
//! - Duplicate detection by file name against the stored entries
//! - Audio-only filter on the file name's MIME type
//! - Encoding of file content to a `data:` URI
//! - Progress and notification events over a channel
//! - Partial success: a failed file never rolls back the files before it
//!
//! # Architecture
//!
//! - `encode`: MIME detection and data URI encoding
//! - `pipeline`: orchestration of a batch upload

mod error;
mod types;

pub mod encode;
pub mod pipeline;

pub use error::ImportError;
pub use pipeline::UploadPipeline;
pub use types::*;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ImportError>;
