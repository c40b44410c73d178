//! Fixed-universe object sets
//!
//! Match sets, class membership and the uncovered set are all subsets of the
//! table's objects, so they are stored as packed bit vectors over object
//! indices. Intersection counts are popcounts, which keeps descriptor scoring
//! cheap.

const WORD_BITS: usize = 64;

/// A set of object indices drawn from `0..universe`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectSet {
    words: Vec<u64>,
    universe: usize,
}

impl ObjectSet {
    /// Empty set over `universe` objects
    pub fn new(universe: usize) -> Self {
        ObjectSet {
            words: vec![0; universe.div_ceil(WORD_BITS)],
            universe,
        }
    }

    /// Set containing every object
    pub fn full(universe: usize) -> Self {
        let mut set = Self::new(universe);
        for word in set.words.iter_mut() {
            *word = u64::MAX;
        }
        let tail = universe % WORD_BITS;
        if tail != 0 {
            if let Some(last) = set.words.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        set
    }

    /// Set holding the given indices
    pub fn from_indices(universe: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new(universe);
        for index in indices {
            set.insert(index);
        }
        set
    }

    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < self.universe);
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    /// Number of objects in the set
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Keep only objects also in `other`
    pub fn intersect_with(&mut self, other: &ObjectSet) {
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= b;
        }
    }

    /// Remove objects that are in `other`
    pub fn difference_with(&mut self, other: &ObjectSet) {
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= !b;
        }
    }

    /// Complement within the universe
    pub fn complement(&self) -> ObjectSet {
        let mut result = ObjectSet::full(self.universe);
        result.difference_with(self);
        result
    }

    /// `|self ∩ other|` without allocating
    pub fn intersection_count(&self, other: &ObjectSet) -> usize {
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// Indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, word)| {
            let mut bits = *word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let offset = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(i * WORD_BITS + offset)
            })
        })
    }
}
