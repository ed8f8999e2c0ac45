use derive_new::new;
use std::collections::HashMap;
use std::hash::Hash;

/// A run of `size` equal elements starting at `a` in the first sequence and
/// at `b` in the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl MatchingBlock {
    pub fn a_end(&self) -> usize {
        self.a + self.size
    }

    pub fn b_end(&self) -> usize {
        self.b + self.size
    }
}

/// Greedy longest-matching-block search over two sequences.
///
/// The longest common contiguous run is found first, then the regions before
/// and after it are searched the same way. No junk or popularity heuristics
/// are applied, so every element takes part in matching. Worst case is
/// quadratic in the sequence lengths, which is fine for passages of a few
/// hundred words but not for whole documents.
#[derive(Debug, Clone)]
pub struct SequenceMatcher<'d, T> {
    a: &'d [T],
    b: &'d [T],
    b2j: HashMap<&'d T, Vec<usize>>,
}

impl<'d, T: Eq + Hash> SequenceMatcher<'d, T> {
    pub fn new(a: &'d [T], b: &'d [T]) -> Self {
        let mut b2j: HashMap<&'d T, Vec<usize>> = HashMap::new();
        for (j, elem) in b.iter().enumerate() {
            b2j.entry(elem).or_default().push(j);
        }

        Self { a, b, b2j }
    }

    /// Longest block of equal elements within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among blocks of maximal size the one starting earliest in `a` wins,
    /// then the one starting earliest in `b`. A zero-sized block at
    /// `(alo, blo)` means there is no match at all.
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> MatchingBlock {
        let mut best = MatchingBlock::new(alo, blo, 0);
        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            let positions = self.b2j.get(&self.a[i]).map(Vec::as_slice).unwrap_or(&[]);

            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }

                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_j2len.insert(j, k);

                if k > best.size {
                    best = MatchingBlock::new(i + 1 - k, j + 1 - k, k);
                }
            }

            j2len = next_j2len;
        }

        best
    }

    /// All maximal matching blocks in increasing order of position, with
    /// adjacent blocks merged and a zero-sized sentinel at
    /// `(a.len(), b.len())` appended.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }

            debug_log!(
                "matched a[{}..{}] with b[{}..{}] inside a[{alo}..{ahi}], b[{blo}..{bhi}]",
                block.a,
                block.a_end(),
                block.b,
                block.b_end()
            );

            blocks.push(block);
            if alo < block.a && blo < block.b {
                queue.push((alo, block.a, blo, block.b));
            }
            if block.a_end() < ahi && block.b_end() < bhi {
                queue.push((block.a_end(), ahi, block.b_end(), bhi));
            }
        }

        blocks.sort();

        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a_end() == block.a && last.b_end() == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }

        merged.push(MatchingBlock::new(la, lb, 0));
        merged
    }
}
