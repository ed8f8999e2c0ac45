use crate::artifacts::diff::matcher::SequenceMatcher;
use crate::artifacts::diff::validator::AlignmentError;
use crate::artifacts::tokens::token::{Token, TokenSequence};
use std::collections::BTreeMap;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Deleted,
    Inserted,
    Shared,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Deleted, Category::Inserted, Category::Shared];
}

impl From<&Category> for &str {
    fn from(category: &Category) -> Self {
        match category {
            Category::Deleted => "deleted",
            Category::Inserted => "inserted",
            Category::Shared => "shared",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = self.into();
        write!(f, "{name}")
    }
}

/// A contiguous, possibly empty, run of tokens of one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segment(Vec<Token>);

impl Segment {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn join(&self) -> String {
        self.0
            .iter()
            .map(Token::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<Token>> for Segment {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl From<&[Token]> for Segment {
    fn from(tokens: &[Token]) -> Self {
        Self(tokens.to_vec())
    }
}

/// One position of an alignment: what was removed and added right before a
/// shared run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedBlock<'r> {
    pub deletion: &'r Segment,
    pub insertion: &'r Segment,
    pub matched: &'r Segment,
}

/// Three parallel segment lists; entry `i` of `deletions` and `insertions`
/// precedes entry `i` of `matches`.
///
/// Results built by [`align`] always have equal-length lists. The fields are
/// public so results can also be assembled elsewhere, which is why
/// [`crate::artifacts::diff::validator::validate`] exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignmentResult {
    pub deletions: Vec<Segment>,
    pub insertions: Vec<Segment>,
    pub matches: Vec<Segment>,
}

impl AlignmentResult {
    fn push(&mut self, deletion: Segment, insertion: Segment, matched: Segment) {
        self.deletions.push(deletion);
        self.insertions.push(insertion);
        self.matches.push(matched);
    }

    /// Number of blocks, counted on the match list.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn segments(&self, category: Category) -> &[Segment] {
        match category {
            Category::Deleted => &self.deletions,
            Category::Inserted => &self.insertions,
            Category::Shared => &self.matches,
        }
    }

    /// Lockstep iteration; stops at the shortest list, so validate first when
    /// the result did not come from [`align`].
    pub fn blocks(&self) -> impl Iterator<Item = AlignedBlock<'_>> {
        self.deletions
            .iter()
            .zip(&self.insertions)
            .zip(&self.matches)
            .map(|((deletion, insertion), matched)| AlignedBlock {
                deletion,
                insertion,
                matched,
            })
    }

    pub fn reconstruct_old(&self) -> TokenSequence {
        self.blocks()
            .flat_map(|block| [block.deletion, block.matched])
            .flat_map(Segment::tokens)
            .cloned()
            .collect()
    }

    pub fn reconstruct_new(&self) -> TokenSequence {
        self.blocks()
            .flat_map(|block| [block.insertion, block.matched])
            .flat_map(Segment::tokens)
            .cloned()
            .collect()
    }

    /// True when nothing was deleted or inserted.
    pub fn is_identical(&self) -> bool {
        self.deletions.iter().all(Segment::is_empty)
            && self.insertions.iter().all(Segment::is_empty)
    }

    pub fn token_count(&self, category: Category) -> usize {
        self.segments(category).iter().map(Segment::len).sum()
    }
}

impl TryFrom<BTreeMap<Category, Vec<Segment>>> for AlignmentResult {
    type Error = AlignmentError;

    fn try_from(mut labelled: BTreeMap<Category, Vec<Segment>>) -> Result<Self, Self::Error> {
        let mut take = |category: Category| {
            labelled
                .remove(&category)
                .ok_or(AlignmentError::MissingCategory { category })
        };

        Ok(Self {
            deletions: take(Category::Deleted)?,
            insertions: take(Category::Inserted)?,
            matches: take(Category::Shared)?,
        })
    }
}

/// Split `old` and `new` into interleaved deletion/insertion/match segments.
///
/// Total over all inputs: two empty sequences give a single block of empty
/// segments, and disjoint sequences give a single block holding all of `old`
/// as a deletion and all of `new` as an insertion.
pub fn align(old: &[Token], new: &[Token]) -> AlignmentResult {
    let matcher = SequenceMatcher::new(old, new);
    let mut result = AlignmentResult::default();
    let (mut next_old, mut next_new) = (0, 0);

    for block in matcher.matching_blocks() {
        result.push(
            Segment::from(&old[next_old..block.a]),
            Segment::from(&new[next_new..block.b]),
            Segment::from(&old[block.a..block.a_end()]),
        );
        next_old = block.a_end();
        next_new = block.b_end();
    }

    debug_log!(
        "aligned {} old and {} new tokens into {} blocks",
        old.len(),
        new.len(),
        result.len()
    );

    result
}
