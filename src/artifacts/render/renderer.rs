use crate::artifacts::diff::alignment::{AlignmentResult, Category, align};
use crate::artifacts::diff::validator::{AlignmentError, validate};
use crate::artifacts::render::style::StylePolicy;
use crate::artifacts::tokens::tokenizer::{Tokenizer, TokenizerOptions};

/// Interleave an alignment into one line: for every block, the deleted run,
/// then the inserted run, then the shared run, each styled by category.
///
/// Fails closed: a structurally broken alignment yields an error and no
/// partial output.
pub fn render(result: &AlignmentResult, style: &dyn StylePolicy) -> Result<String, AlignmentError> {
    validate(result)?;

    let last = result.len().saturating_sub(1);
    let mut rendered = String::new();

    for (i, block) in result.blocks().enumerate() {
        if !block.deletion.is_empty() {
            rendered.push_str(&style.apply(Category::Deleted, &block.deletion.join()));
            rendered.push(' ');
        }
        if !block.insertion.is_empty() {
            rendered.push_str(&style.apply(Category::Inserted, &block.insertion.join()));
            rendered.push(' ');
        }
        if !block.matched.is_empty() {
            rendered.push_str(&style.apply(Category::Shared, &block.matched.join()));
            if i < last {
                rendered.push(' ');
            }
        }
    }

    rendered.push_str(&style.terminator());

    Ok(rendered.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Tokenize, align and render two passages in one go.
pub fn compare(
    old_text: &str,
    new_text: &str,
    options: &TokenizerOptions,
    style: &dyn StylePolicy,
) -> anyhow::Result<String> {
    let tokenizer = Tokenizer::new(options.clone())?;
    let old = tokenizer.tokenize(old_text);
    let new = tokenizer.tokenize(new_text);

    let result = align(&old, &new);
    Ok(render(&result, style)?)
}
