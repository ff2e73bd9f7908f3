use std::{cmp::Ordering, fmt};

use crate::{engine::Engine, error::RecommendError};

/// Ranked recommendations for one query
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    /// (item name, similarity score), best first
    pub list: Vec<(String, f64)>,
}

impl Recommendations {
    pub fn names(&self) -> Vec<String> {
        self.list.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl fmt::Display for Recommendations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, (name, score)) in self.list.iter().enumerate() {
            if f.alternate() {
                writeln!(f, "{:>3}. {} ({:.4})", rank + 1, name, score)?;
            } else {
                writeln!(f, "{:>3}. {}", rank + 1, name)?;
            }
        }
        Ok(())
    }
}

impl Engine {
    /// Names of the `k` items most similar to `query_name`.
    ///
    /// The query must match an item name exactly. The query item (and any
    /// later item sharing its name) is never part of the result.
    pub fn recommend(&self, query_name: &str, k: usize) -> Result<Vec<String>, RecommendError> {
        Ok(self.recommend_scored(query_name, k)?.names())
    }

    /// [`Engine::recommend`] with the configured default `k`
    pub fn recommend_default(&self, query_name: &str) -> Result<Vec<String>, RecommendError> {
        self.recommend(query_name, self.top_k)
    }

    /// Like [`Engine::recommend`] but keeps the similarity scores
    pub fn recommend_scored(
        &self,
        query_name: &str,
        k: usize,
    ) -> Result<Recommendations, RecommendError> {
        let not_found = || RecommendError::NotFound {
            name: query_name.to_string(),
        };
        let id = self.corpus.id_of(query_name).ok_or_else(not_found)?;
        let row = self.similarity.row(id).ok_or_else(not_found)?;

        let candidates: Vec<(usize, f64)> = row
            .iter()
            .enumerate()
            .filter(|&(other, _)| {
                other != id && self.corpus.name(other).is_some_and(|name| name != query_name)
            })
            .map(|(other, &score)| (other, score))
            .collect();

        let list = top_k(candidates, k)
            .into_iter()
            .filter_map(|(other, score)| {
                self.corpus.name(other).map(|name| (name.to_string(), score))
            })
            .collect();
        Ok(Recommendations { list })
    }
}

/// descending score, then ascending id
#[inline]
fn rank_order(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then(a.0.cmp(&b.0))
}

/// The `k` best candidates in rank order
fn top_k(mut candidates: Vec<(usize, f64)>, k: usize) -> Vec<(usize, f64)> {
    if k == 0 {
        return Vec::new();
    }
    if k < candidates.len() {
        candidates.select_nth_unstable_by(k - 1, rank_order);
        candidates.truncate(k);
    }
    candidates.sort_unstable_by(rank_order);
    candidates
}
