//! Change detection between two token sequences
//!
//! - `matcher`: longest-matching-block search (leftmost-longest, no junk heuristics)
//! - `alignment`: turning matching blocks into deletion/insertion/match segments
//! - `validator`: structural checks on alignments that arrive from outside the aligner

pub mod alignment;
pub mod matcher;
pub mod validator;
