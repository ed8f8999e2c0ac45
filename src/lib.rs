//! passdiff: word-level change highlighting for closely related text passages
//!
//! The pipeline has three stages:
//!
//! - `artifacts::tokens`: normalize a raw buffer into a sequence of word-like tokens
//! - `artifacts::diff`: align two token sequences into deletion/insertion/match segments
//! - `artifacts::render`: interleave the segments into one styled line
//!
//! `areas` holds the I/O-facing session state and `commands` the user-facing
//! operations built on top of the pipeline.

/// Macro for debug logging that is enabled with the debug_align feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("matching block {:?}", block);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_align")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;

/// When to emit ANSI colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}
