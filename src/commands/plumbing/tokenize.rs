use crate::areas::session::Session;
use crate::artifacts::tokens::tokenizer::{Tokenizer, TokenizerOptions};

impl Session {
    /// Print the tokens of one passage, one per line.
    pub fn tokenize(&self, file: &str, options: &TokenizerOptions) -> anyhow::Result<()> {
        let text = self.workspace().read_text(file)?;
        let tokens = Tokenizer::new(options.clone())?.tokenize(&text);

        for token in tokens {
            writeln!(self.writer(), "{token}")?;
        }

        Ok(())
    }
}
