//! I/O-facing components
//!
//! - `session`: output writer and entry point for every command
//! - `workspace`: reading passages from files or stdin

pub mod session;
pub(crate) mod workspace;
