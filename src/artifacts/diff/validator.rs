use crate::artifacts::diff::alignment::{AlignmentResult, Category};
use thiserror::Error;

/// Structural defects in an alignment. Any of these means the alignment
/// bookkeeping upstream is broken; rendering must not proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    #[error("malformed alignment: missing {category} segments")]
    MissingCategory { category: Category },
    #[error(
        "malformed alignment: segment counts differ \
        (deletions = {deletions}, insertions = {insertions}, matches = {matches})"
    )]
    LengthMismatch {
        deletions: usize,
        insertions: usize,
        matches: usize,
    },
}

pub fn validate(result: &AlignmentResult) -> Result<(), AlignmentError> {
    let (deletions, insertions, matches) = (
        result.deletions.len(),
        result.insertions.len(),
        result.matches.len(),
    );

    if deletions != matches || insertions != matches {
        return Err(AlignmentError::LengthMismatch {
            deletions,
            insertions,
            matches,
        });
    }

    Ok(())
}

pub fn is_valid(result: &AlignmentResult) -> bool {
    validate(result).is_ok()
}
