use crate::areas::session::Session;
use crate::artifacts::render::renderer::compare;
use crate::artifacts::render::style::StyleKind;
use crate::artifacts::tokens::tokenizer::TokenizerOptions;
use derive_new::new;

#[derive(Debug, Clone, Default, new)]
pub struct CompareOptions {
    pub tokenizer: TokenizerOptions,
    pub style: StyleKind,
}

impl Session {
    /// Render the changes from `old_file` to `new_file` as one highlighted line.
    pub fn compare(
        &self,
        old_file: &str,
        new_file: &str,
        opts: &CompareOptions,
    ) -> anyhow::Result<()> {
        if old_file == "-" && new_file == "-" {
            anyhow::bail!("only one passage can be read from stdin");
        }

        let old_text = self.workspace().read_text(old_file)?;
        let new_text = self.workspace().read_text(new_file)?;

        let rendered = compare(
            &old_text,
            &new_text,
            &opts.tokenizer,
            opts.style.policy().as_ref(),
        )?;
        writeln!(self.writer(), "{rendered}")?;

        Ok(())
    }
}
