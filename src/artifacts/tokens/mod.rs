//! Tokenization of raw text buffers
//!
//! - `token`: the `Token` value type
//! - `tokenizer`: normalization passes turning a buffer into a `TokenSequence`

pub mod token;
pub mod tokenizer;

/// Line breaks, plus the escaped and mis-encoded carriage-return artifacts
/// that show up in text exported from spreadsheets.
pub const LINE_BREAK_REGEX: &str = r"\r\n|\r|\n|_x000D_|x000D|\\r\\n|\\n\\n|\\n\?|\\n";
pub const DEFAULT_EXEMPT_PUNCTUATION: [char; 3] = ['-', '$', '/'];
pub const DEFAULT_JUNK: [&str; 4] = ["\u{FFFD}", "_x000D_", "x000D", "\u{00AC}"];
