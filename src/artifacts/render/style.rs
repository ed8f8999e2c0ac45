use crate::ColorWhen;
use crate::artifacts::diff::alignment::Category;
use crate::artifacts::render::STYLE_ALIASES;
use colored::Color;
use derive_new::new;

const ANSI_RESET: &str = "\x1b[0m";

/// Formatting applied to each joined segment, plus one terminator emitted at
/// the very end of the rendering.
pub trait StylePolicy {
    fn apply(&self, category: Category, text: &str) -> String;

    fn terminator(&self) -> String {
        String::new()
    }
}

/// Terminal colours. Each segment only switches the colour on; the reset is
/// emitted once as the terminator.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct AnsiStyle {
    deleted: Color,
    inserted: Color,
    shared: Color,
}

impl Default for AnsiStyle {
    fn default() -> Self {
        Self::new(Color::BrightRed, Color::Green, Color::BrightYellow)
    }
}

impl AnsiStyle {
    fn color(&self, category: Category) -> Color {
        match category {
            Category::Deleted => self.deleted,
            Category::Inserted => self.inserted,
            Category::Shared => self.shared,
        }
    }
}

impl StylePolicy for AnsiStyle {
    fn apply(&self, category: Category, text: &str) -> String {
        format!("\x1b[{}m{}", self.color(category).to_fg_str(), text)
    }

    fn terminator(&self) -> String {
        ANSI_RESET.to_string()
    }
}

/// `[-removed-]` and `[+added+]` markers, shared text left as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerStyle;

impl StylePolicy for MarkerStyle {
    fn apply(&self, category: Category, text: &str) -> String {
        match category {
            Category::Deleted => format!("[-{text}-]"),
            Category::Inserted => format!("[+{text}+]"),
            Category::Shared => text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlStyle;

impl HtmlStyle {
    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

impl StylePolicy for HtmlStyle {
    fn apply(&self, category: Category, text: &str) -> String {
        let text = Self::escape(text);
        match category {
            Category::Deleted => format!("<del>{text}</del>"),
            Category::Inserted => format!("<ins>{text}</ins>"),
            Category::Shared => format!("<span>{text}</span>"),
        }
    }
}

/// No markup at all; useful to read the merged word stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl StylePolicy for PlainStyle {
    fn apply(&self, _category: Category, text: &str) -> String {
        text.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleKind {
    #[default]
    Ansi,
    Markers,
    Html,
    Plain,
}

impl StyleKind {
    pub fn try_parse(name: &str) -> anyhow::Result<Self> {
        let name = name.trim().to_ascii_lowercase();
        let name = STYLE_ALIASES
            .get(name.as_str())
            .copied()
            .unwrap_or(name.as_str());

        match name {
            "ansi" => Ok(StyleKind::Ansi),
            "markers" => Ok(StyleKind::Markers),
            "html" => Ok(StyleKind::Html),
            "plain" => Ok(StyleKind::Plain),
            _ => anyhow::bail!(
                "unknown style '{}', expected one of: ansi, markers, html, plain",
                name
            ),
        }
    }

    /// Downgrade ANSI colours to plain text when they would end up as raw
    /// escape codes: colour disabled, or output not going to a terminal.
    pub fn resolve(self, color: ColorWhen, is_terminal: bool) -> Self {
        let colorize = match color {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => is_terminal,
        };

        match self {
            StyleKind::Ansi if !colorize => StyleKind::Plain,
            kind => kind,
        }
    }

    pub fn policy(&self) -> Box<dyn StylePolicy> {
        match self {
            StyleKind::Ansi => Box::new(AnsiStyle::default()),
            StyleKind::Markers => Box::new(MarkerStyle),
            StyleKind::Html => Box::new(HtmlStyle),
            StyleKind::Plain => Box::new(PlainStyle),
        }
    }
}

impl std::fmt::Display for StyleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StyleKind::Ansi => "ansi",
            StyleKind::Markers => "markers",
            StyleKind::Html => "html",
            StyleKind::Plain => "plain",
        };
        write!(f, "{name}")
    }
}
