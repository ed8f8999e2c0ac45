use std::fmt::Display;

/// A normalized word-like unit of text.
///
/// Tokens compare by exact string equality; they carry no identity beyond
/// their value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Token(String);

pub type TokenSequence = Vec<Token>;

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build a token sequence from string slices, mostly useful in tests and demos.
pub fn tokens_of<I, S>(words: I) -> TokenSequence
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| Token::from(word.as_ref()))
        .collect()
}
