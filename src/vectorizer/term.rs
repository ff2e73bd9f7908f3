use std::cmp::Reverse;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TermFrequency struct
/// Manages the frequency of term occurrences.
/// Counts the number of times each term appears and remembers
/// the order in which distinct terms were first seen.
///
/// # Examples
/// ```
/// use anirec::vectorizer::term::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("term1");
/// term_freq.add_term("term2");
/// term_freq.add_term("term1");
///
/// assert_eq!(term_freq.term_count("term1"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - terms to add
    #[inline]
    pub fn add_terms<I, T>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Get the occurrence count of a term
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of terms added
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Iterate over terms and counts in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Terms ranked by descending frequency.
    /// Ties fall back to first-seen order, then to lexicographic order.
    ///
    /// # Returns
    /// * `Vec<(&str, u64)>` - at most `limit` terms with their counts
    pub fn most_frequent(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(usize, &str, u64)> = self
            .term_count
            .iter()
            .enumerate()
            .map(|(first_seen, (term, &count))| (first_seen, term.as_str(), count))
            .collect();
        ranked.sort_unstable_by_key(|&(first_seen, term, count)| (Reverse(count), first_seen, term));
        ranked.truncate(limit);
        ranked.into_iter().map(|(_, term, count)| (term, count)).collect()
    }
}

impl<T> FromIterator<T> for TermFrequency
where
    T: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(iter);
        tf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_terms() {
        let tf: TermFrequency = ["b", "a", "b", "c", "b"].into_iter().collect();
        assert_eq!(tf.term_count("b"), 3);
        assert_eq!(tf.term_count("z"), 0);
        assert_eq!(tf.term_sum(), 5);
        assert_eq!(tf.term_num(), 3);
        assert_eq!(tf.iter().map(|(t, _)| t).collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn most_frequent_breaks_ties_by_first_seen() {
        let tf: TermFrequency = ["zeta", "alpha", "mid", "alpha", "zeta", "mid", "new"]
            .into_iter()
            .collect();
        let ranked = tf.most_frequent(10);
        assert_eq!(
            ranked,
            vec![("zeta", 2), ("alpha", 2), ("mid", 2), ("new", 1)]
        );
        assert_eq!(tf.most_frequent(2), vec![("zeta", 2), ("alpha", 2)]);
        assert!(tf.most_frequent(0).is_empty());
    }
}
