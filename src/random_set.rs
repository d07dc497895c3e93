//! Sets of cell indices with uniform random picking
//!
//! Both maze generation and flood fill move cells between a handful of
//! disjoint sets. The grid size is fixed, so a set is a bitset over flat
//! cell indices: membership, insert and remove are O(1), and a uniform
//! random member is found by drawing a rank and scanning word popcounts.

use rand::Rng;

use crate::error::MazeError;

const WORD_BITS: usize = u64::BITS as usize;

/// Bitset over cell indices `0..capacity`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellSet {
    words: Vec<u64>,
    capacity: usize,
    len: usize,
}

impl CellSet {
    /// Empty set able to hold indices `0..capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            capacity,
            len: 0,
        }
    }

    /// Set holding every index `0..capacity`
    pub fn full(capacity: usize) -> Self {
        let mut set = Self::new(capacity);
        for word in set.words.iter_mut() {
            *word = u64::MAX;
        }
        let tail = capacity % WORD_BITS;
        if tail != 0 {
            if let Some(last) = set.words.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        set.len = capacity;
        set
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.capacity && self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Add `index`; returns `true` if it was not present before
    pub fn insert(&mut self, index: usize) -> bool {
        debug_assert!(index < self.capacity);
        let (word, bit) = (index / WORD_BITS, 1u64 << (index % WORD_BITS));
        let fresh = self.words[word] & bit == 0;
        self.words[word] |= bit;
        self.len += usize::from(fresh);
        fresh
    }

    /// Drop `index`; returns `true` if it was present
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
        self.len -= 1;
        true
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(w * WORD_BITS + bit)
            })
        })
    }

    /// The `rank`-th smallest member
    fn nth(&self, mut rank: usize) -> Option<usize> {
        for (w, &word) in self.words.iter().enumerate() {
            let ones = word.count_ones() as usize;
            if rank < ones {
                let mut rest = word;
                for _ in 0..rank {
                    rest &= rest - 1;
                }
                return Some(w * WORD_BITS + rest.trailing_zeros() as usize);
            }
            rank -= ones;
        }
        None
    }

    /// One member chosen with probability `1 / len`
    pub fn random_member<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, MazeError> {
        if self.is_empty() {
            return Err(MazeError::EmptyCollection);
        }
        self.nth(rng.gen_range(0..self.len))
            .ok_or(MazeError::EmptyCollection)
    }

    /// Remove and return a uniformly random member
    pub fn pop_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, MazeError> {
        let index = self.random_member(rng)?;
        self.remove(index);
        Ok(index)
    }

    /// Remove and return the smallest member
    pub fn pop_first(&mut self) -> Option<usize> {
        let index = self.iter().next()?;
        self.remove(index);
        Some(index)
    }

    /// Members present in both sets
    pub fn intersection(&self, other: &CellSet) -> CellSet {
        self.zip_with(other, |a, b| a & b)
    }

    /// Members of `self` missing from `other`
    pub fn difference(&self, other: &CellSet) -> CellSet {
        self.zip_with(other, |a, b| a & !b)
    }

    fn zip_with(&self, other: &CellSet, op: impl Fn(u64, u64) -> u64) -> CellSet {
        let words: Vec<u64> = self
            .words
            .iter()
            .enumerate()
            .map(|(i, &a)| op(a, other.words.get(i).copied().unwrap_or(0)))
            .collect();
        let len = words.iter().map(|w| w.count_ones() as usize).sum();
        CellSet {
            words,
            capacity: self.capacity,
            len,
        }
    }
}

/// One element of `items` chosen with probability `1 / items.len()`
pub fn uniform_random_member<T: Copy, R: Rng + ?Sized>(
    items: &[T],
    rng: &mut R,
) -> Result<T, MazeError> {
    if items.is_empty() {
        return Err(MazeError::EmptyCollection);
    }
    Ok(items[rng.gen_range(0..items.len())])
}

/// Move each of `items` that is in `from` over to `to`.
///
/// Items missing from `from` are left alone in both sets, so a cell that
/// already left a set is never put back.
pub fn shuttle(items: impl IntoIterator<Item = usize>, from: &mut CellSet, to: &mut CellSet) {
    for item in items {
        if from.remove(item) {
            to.insert(item);
        }
    }
}
