use crate::areas::session::Session;
use crate::artifacts::diff::alignment::Category;
use crate::artifacts::render::renderer::compare;
use crate::artifacts::render::style::{StyleKind, StylePolicy};
use crate::artifacts::tokens::tokenizer::TokenizerOptions;

pub const DEMO_OLD_TEXT: &str = "Citizens!  The government regrets to announce that the chocolate\n\
    ration has been decreased from 50g/day to 25g/day.";
pub const DEMO_NEW_TEXT: &str = "Citizens!  The government is pleased to announce that the chocolate\n\
    ration has been increased from 50g/day to 25g/day.  Doubleplusgood!";

impl Session {
    /// Compare the built-in before/after passages (with apologies to Orwell).
    pub fn demo(&self, style: StyleKind) -> anyhow::Result<()> {
        let policy = style.policy();

        writeln!(self.writer(), "Old text:\n{DEMO_OLD_TEXT}")?;
        writeln!(self.writer(), "New text:\n{DEMO_NEW_TEXT}")?;
        writeln!(self.writer(), "Merged text with")?;
        self.print_legend(policy.as_ref())?;

        let rendered = compare(
            DEMO_OLD_TEXT,
            DEMO_NEW_TEXT,
            &TokenizerOptions::default(),
            policy.as_ref(),
        )?;
        writeln!(self.writer(), "{rendered}")?;

        Ok(())
    }

    fn print_legend(&self, policy: &dyn StylePolicy) -> anyhow::Result<()> {
        for (category, label) in [
            (Category::Shared, "common words"),
            (Category::Deleted, "deleted words"),
            (Category::Inserted, "inserted words"),
        ] {
            writeln!(
                self.writer(),
                "  * {}{}",
                policy.apply(category, label),
                policy.terminator()
            )?;
        }

        Ok(())
    }
}
