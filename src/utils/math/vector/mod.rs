pub mod math;

use num::Num;
use serde::{Deserialize, Serialize};

/// ZeroSpVec is a sparse vector that treats zero elements as implicit.
/// It holds `inds` and `vals`:
/// `inds` stores the index of each stored element,
/// `vals` stores the value of each stored element.
///
/// Elements are guaranteed to be sorted by ascending index and
/// no stored value is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    len: usize,
    inds: Vec<u32>,
    vals: Vec<N>,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Create an all-zero vector of logical length `len`
    #[inline]
    pub fn new(len: usize) -> Self {
        ZeroSpVec {
            len,
            inds: Vec::new(),
            vals: Vec::new(),
        }
    }

    /// Build a vector by counting index occurrences.
    /// Each occurrence of an index adds `N::one()` to that element.
    /// Indices at or beyond `len` are ignored.
    pub fn from_occurrences(len: usize, mut occurrences: Vec<usize>) -> Self {
        occurrences.retain(|&idx| idx < len);
        occurrences.sort_unstable();
        let mut vec = Self::new(len);
        for idx in occurrences {
            let idx = idx as u32;
            match vec.inds.last() {
                Some(&last) if last == idx => {
                    if let Some(val) = vec.vals.last_mut() {
                        *val = *val + N::one();
                    }
                }
                _ => {
                    vec.inds.push(idx);
                    vec.vals.push(N::one());
                }
            }
        }
        vec.shrink_to_fit();
        vec
    }

    /// Build from a dense slice, dropping zero elements
    pub fn from_dense(dense: &[N]) -> Self {
        let mut vec = Self::new(dense.len());
        for (idx, &val) in dense.iter().enumerate() {
            if !val.is_zero() {
                vec.inds.push(idx as u32);
                vec.vals.push(val);
            }
        }
        vec
    }

    /// logical length (dimension)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// number of non-zero elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// Get the element at `index`, zero when not stored
    #[inline]
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&(index as u32)) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// iterate over stored `(index, value)` pairs in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds
            .iter()
            .zip(self.vals.iter())
            .map(|(&idx, &val)| (idx as usize, val))
    }

    /// Expand into a dense vector of length `len()`
    pub fn to_dense(&self) -> Vec<N> {
        let mut dense = vec![N::zero(); self.len];
        for (idx, val) in self.raw_iter() {
            dense[idx] = val;
        }
        dense
    }

    /// true when `inds` and `vals` pair up, indices strictly ascend below
    /// `len`, and no stored value is zero
    pub fn is_consistent(&self) -> bool {
        self.inds.len() == self.vals.len()
            && self.inds.windows(2).all(|w| w[0] < w[1])
            && self.inds.last().map_or(true, |&last| (last as usize) < self.len)
            && self.vals.iter().all(|val| !val.is_zero())
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}
