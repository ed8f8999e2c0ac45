//! Command implementations
//!
//! - `plumbing`: low-level inspection of a single pipeline stage (tokenize)
//! - `porcelain`: user-facing comparisons (compare, demo)
//!
//! Every command is a method on [`crate::areas::session::Session`] and writes
//! to the session's writer.

pub mod plumbing;
pub mod porcelain;
