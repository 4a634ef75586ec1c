//! Report merge library
//!
//! Loads a base JSON report and a secondary benchmark document, attaches the
//! secondary document as a single top-level field of the base, and writes the
//! result. A console mode prints the secondary document instead, for
//! debugging.

pub mod config;
pub mod document;
pub mod error;
mod format;
pub mod merger;
pub mod output;

pub use config::{MergeConfig, OutputMode};
pub use document::{attach, load_document, render, write_document};
pub use error::MergeError;
pub use merger::{MergeOutcome, Merger, merge};
pub use output::OutputTarget;

/// Result type commonly used throughout the library
pub type Result<T> = std::result::Result<T, MergeError>;
