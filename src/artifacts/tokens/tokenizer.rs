use crate::artifacts::tokens::token::{Token, TokenSequence};
use crate::artifacts::tokens::{DEFAULT_EXEMPT_PUNCTUATION, DEFAULT_JUNK, LINE_BREAK_REGEX};
use anyhow::Context;
use derive_new::new;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TokenizerOptions {
    pub remove_punctuation: bool,
    pub exempt_punctuation: Vec<char>,
    pub junk: Vec<String>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            remove_punctuation: true,
            exempt_punctuation: DEFAULT_EXEMPT_PUNCTUATION.to_vec(),
            junk: DEFAULT_JUNK.iter().map(|junk| junk.to_string()).collect(),
        }
    }
}

impl TokenizerOptions {
    pub fn keep_punctuation() -> Self {
        Self {
            remove_punctuation: false,
            ..Self::default()
        }
    }

    /// ASCII punctuation marks that are not exempted, in code point order.
    pub fn removal_set(&self) -> Vec<char> {
        (0u8..=0x7f)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .filter(|c| !self.exempt_punctuation.contains(c))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    options: TokenizerOptions,
    line_breaks: Regex,
    punctuation: Option<Regex>,
}

impl Tokenizer {
    pub fn new(options: TokenizerOptions) -> anyhow::Result<Self> {
        let line_breaks = Regex::new(LINE_BREAK_REGEX)
            .with_context(|| format!("invalid line break regex: {LINE_BREAK_REGEX}"))?;

        let removal_set = options.removal_set();
        let punctuation = if options.remove_punctuation && !removal_set.is_empty() {
            let class = removal_set
                .iter()
                .map(|c| regex::escape(&c.to_string()))
                .collect::<String>();
            let pattern = format!("[{class}]");
            Some(
                Regex::new(&pattern)
                    .with_context(|| format!("invalid punctuation regex: {pattern}"))?,
            )
        } else {
            None
        };

        Ok(Self {
            options,
            line_breaks,
            punctuation,
        })
    }

    pub fn tokenize(&self, buffer: &str) -> TokenSequence {
        let buffer = self.line_breaks.replace_all(buffer, " ");

        buffer
            .split(char::is_whitespace)
            .map(|candidate| self.clean(candidate))
            .filter_map(|candidate| {
                let trimmed = candidate.trim();
                (!trimmed.is_empty()).then(|| Token::from(trimmed))
            })
            .collect()
    }

    fn clean(&self, candidate: &str) -> String {
        if !self.options.remove_punctuation {
            return candidate.to_string();
        }

        let mut cleaned = match &self.punctuation {
            Some(re) => re.replace_all(candidate, "").into_owned(),
            None => candidate.to_string(),
        };
        for junk in self.options.junk.iter().filter(|junk| !junk.is_empty()) {
            cleaned = cleaned.replace(junk.as_str(), "");
        }

        cleaned
    }
}

/// One-shot tokenization with freshly compiled patterns.
pub fn tokenize(buffer: &str, options: &TokenizerOptions) -> anyhow::Result<TokenSequence> {
    Ok(Tokenizer::new(options.clone())?.tokenize(buffer))
}
