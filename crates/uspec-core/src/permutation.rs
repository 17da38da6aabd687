//! Length-bounded permutation generation.
//!
//! [`BoundedPermutations`] walks the arrangements of `r` tokens out of a pool
//! using the classic index/cycle scheme and yields the concatenation of each
//! arrangement whose length stays within an optional maximum.
//!
//! Two shortcuts keep the walk cheap:
//!
//! - The pool is ordered by token length, so the `r` shortest tokens sit at the
//!   front. When even their combined length exceeds the maximum the iterator
//!   is empty from the start.
//! - The length of an arrangement is summed from cached token lengths and the
//!   string is only built for arrangements that fit.
//!
//! The sequence is finite and consumed once; build a new iterator to walk it
//! again.

use uspec_model::char_len;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Fresh,
    Running,
    Exhausted,
}

/// Iterator over concatenated `r`-arrangements of a token pool.
#[derive(Debug, Clone)]
pub struct BoundedPermutations<'a> {
    pool: Vec<&'a str>,
    lengths: Vec<usize>,
    r: usize,
    max_len: Option<usize>,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    state: WalkState,
}

impl<'a> BoundedPermutations<'a> {
    /// Prepares the walk over `tokens` taken `r` at a time.
    ///
    /// `max_len` of `None` disables the length bound. `r == 0` and
    /// `r > tokens.len()` produce an empty sequence.
    pub fn new<I>(tokens: I, r: usize, max_len: Option<usize>) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut pool: Vec<&'a str> = tokens.into_iter().collect();
        pool.sort_by_key(|token| char_len(token));
        let lengths: Vec<usize> = pool.iter().map(|token| char_len(token)).collect();
        let n = pool.len();

        let impossible = r == 0 || r > n;
        let too_long = !impossible
            && max_len.is_some_and(|max| lengths[..r].iter().sum::<usize>() > max);
        let exhausted = impossible || too_long;

        let cycles = if exhausted {
            Vec::new()
        } else {
            ((n - r + 1)..=n).rev().collect()
        };

        Self {
            pool,
            lengths,
            r,
            max_len,
            indices: (0..n).collect(),
            cycles,
            state: if exhausted {
                WalkState::Exhausted
            } else {
                WalkState::Fresh
            },
        }
    }

    /// Moves to the next index arrangement; false once the cycle is complete.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        for i in (0..self.r).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = self.cycles[i];
                self.indices.swap(i, n - j);
                return true;
            }
        }
        false
    }

    fn current_len(&self) -> usize {
        self.indices[..self.r]
            .iter()
            .map(|&index| self.lengths[index])
            .sum()
    }

    fn render(&self) -> String {
        self.indices[..self.r]
            .iter()
            .map(|&index| self.pool[index])
            .collect()
    }
}

impl Iterator for BoundedPermutations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                WalkState::Exhausted => return None,
                WalkState::Fresh => self.state = WalkState::Running,
                WalkState::Running => {
                    if !self.advance() {
                        self.state = WalkState::Exhausted;
                        return None;
                    }
                }
            }
            let fits = self.max_len.is_none_or(|max| self.current_len() <= max);
            if fits {
                return Some(self.render());
            }
        }
    }
}

/// Convenience constructor, see [`BoundedPermutations::new`].
pub fn bounded_permutations<'a, I>(
    tokens: I,
    r: usize,
    max_len: Option<usize>,
) -> BoundedPermutations<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    BoundedPermutations::new(tokens, r, max_len)
}

/// Number of `r`-arrangements of `n` items, `n! / (n - r)!`, or 0 when `r > n`.
///
/// Saturates at `u128::MAX`.
pub fn arrangement_count(n: usize, r: usize) -> u128 {
    if r > n {
        return 0;
    }
    ((n - r + 1)..=n).fold(1u128, |acc, k| acc.saturating_mul(k as u128))
}
