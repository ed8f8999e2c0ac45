//! Data structures and algorithms of the comparison pipeline
//!
//! - `tokens`: tokens and the tokenizer
//! - `diff`: matching-block search, alignment and validation
//! - `render`: style policies and the interleaving renderer

pub mod diff;
pub mod render;
pub mod tokens;
