//! Presentation of alignments
//!
//! - `style`: pluggable per-category formatting (ANSI, markers, HTML, plain)
//! - `renderer`: interleaving segments into a single display line

pub mod renderer;
pub mod style;

pub const STYLE_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "color" => "ansi",
    "colour" => "ansi",
    "brackets" => "markers",
    "text" => "plain",
};
