use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vectorizer::{analyzer::Analyzer, corpus::Item, stop_words::StopWords, term::TermFrequency};

/// Bounded set of terms used as vector dimensions.
/// The position of a term in `terms` is its slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: IndexSet<String>,
    analyzer: Analyzer,
}

impl Vocabulary {
    /// Select at most `max_terms` terms by descending corpus frequency.
    /// Ties go to the term seen first in the corpus, then to lexicographic order.
    /// Slots are assigned in selection order.
    pub fn build(items: &[Item], stop_words: &StopWords, max_terms: usize) -> Self {
        let analyzer = Analyzer::new(stop_words.clone());
        let mut freq = TermFrequency::new();
        for item in items {
            freq.add_terms(analyzer.terms(&item.feature_text));
        }
        let terms: IndexSet<String> = freq
            .most_frequent(max_terms)
            .into_iter()
            .map(|(term, _)| term.to_string())
            .collect();
        debug!(
            distinct = freq.term_num(),
            occurrences = freq.term_sum(),
            selected = terms.len(),
            "vocabulary built"
        );
        Self { terms, analyzer }
    }

    /// The analyzer the vocabulary was built with
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    #[inline]
    pub fn slot(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    #[inline]
    pub fn term(&self, slot: usize) -> Option<&str> {
        self.terms.get_index(slot).map(String::as_str)
    }

    /// Terms in slot order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
