use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{corpus::Item, vocabulary::Vocabulary},
};

/// Term counts of one item over the vocabulary.
/// Stored sparsely; the logical length always equals the vocabulary size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    counts: ZeroSpVec<u32>,
}

impl FeatureVector {
    /// Count the item's terms per vocabulary slot.
    /// Terms outside the vocabulary are dropped.
    pub fn vectorize(item: &Item, vocab: &Vocabulary) -> Self {
        let slots: Vec<usize> = vocab
            .analyzer()
            .terms(&item.feature_text)
            .filter_map(|term| vocab.slot(&term))
            .collect();
        Self {
            counts: ZeroSpVec::from_occurrences(vocab.len(), slots),
        }
    }

    /// Vectorize every item, in parallel, preserving item order
    pub fn vectorize_all(items: &[Item], vocab: &Vocabulary) -> Vec<Self> {
        items
            .par_iter()
            .map(|item| Self::vectorize(item, vocab))
            .collect()
    }

    /// Dimension (vocabulary size)
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// true when no term of the item made it into the vocabulary
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.counts.nnz() == 0
    }

    #[inline]
    pub fn count(&self, slot: usize) -> u32 {
        self.counts.get(slot)
    }

    pub fn counts(&self) -> &ZeroSpVec<u32> {
        &self.counts
    }

    pub fn to_dense(&self) -> Vec<u32> {
        self.counts.to_dense()
    }
}
