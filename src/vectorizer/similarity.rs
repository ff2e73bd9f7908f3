use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vectorizer::feature::FeatureVector;

/// Dense, symmetric `n × n` cosine-similarity matrix, row-major.
///
/// Scores lie in `[0, 1]`. The diagonal is `1.0` for items with at least one
/// vocabulary term and `0.0` for all-zero vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Cosine similarity over every pair of vectors.
    ///
    /// Rows of the upper triangle are computed in parallel against the shared,
    /// read-only vectors; the result is then mirrored into the lower triangle.
    pub fn build(vectors: &[FeatureVector]) -> Self {
        let n = vectors.len();
        let norms_sq: Vec<f64> = vectors.par_iter().map(|v| v.counts().norm_sq()).collect();

        let upper: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (i..n)
                    .map(|j| {
                        if i != j {
                            cosine(&vectors[i], &vectors[j], norms_sq[i], norms_sq[j])
                        } else if norms_sq[i] > 0.0 {
                            1.0
                        } else {
                            0.0
                        }
                    })
                    .collect()
            })
            .collect();

        let mut scores = vec![0.0; n * n];
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, score) in row.into_iter().enumerate() {
                let j = i + offset;
                scores[i * n + j] = score;
                scores[j * n + i] = score;
            }
        }
        Self { n, scores }
    }

    /// number of rows (== number of items)
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Score between items `i` and `j`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.n && j < self.n).then(|| self.scores[i * self.n + j])
    }

    /// All scores of item `i`
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.n).then(|| &self.scores[i * self.n..(i + 1) * self.n])
    }

    /// true when there are exactly `n × n` scores, all inside `[0, 1]`
    pub fn is_consistent(&self) -> bool {
        self.n.checked_mul(self.n) == Some(self.scores.len())
            && self.scores.iter().all(|score| (0.0..=1.0).contains(score))
    }
}

/// cos(θ) = A・B / sqrt(|A|² |B|²), given the squared norms of both vectors.
/// Zero when either vector is zero; clamped into `[0, 1]`.
#[inline]
fn cosine(a: &FeatureVector, b: &FeatureVector, norm_sq_a: f64, norm_sq_b: f64) -> f64 {
    if norm_sq_a == 0.0 || norm_sq_b == 0.0 {
        return 0.0;
    }
    let score = a.counts().dot(b.counts()) / (norm_sq_a * norm_sq_b).sqrt();
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::{corpus::Corpus, stop_words::StopWords, vocabulary::Vocabulary};

    fn matrix(pairs: &[(&str, &str)]) -> SimilarityMatrix {
        let corpus = Corpus::from_pairs(pairs.iter().copied());
        let vocab = Vocabulary::build(corpus.items(), &StopWords::english(), 5000);
        SimilarityMatrix::build(&FeatureVector::vectorize_all(corpus.items(), &vocab))
    }

    #[test]
    fn diagonal_and_symmetry() {
        let m = matrix(&[
            ("A", "ninja village friendship"),
            ("B", "ninja war"),
            ("C", "school friendship romance romance"),
            ("D", "the of"),
        ]);
        assert_eq!(m.len(), 4);
        for i in 0..3 {
            assert_eq!(m.get(i, i), Some(1.0));
        }
        assert_eq!(m.get(3, 3), Some(0.0));
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m.get(i, j), m.get(j, i));
                let s = m.get(i, j).unwrap();
                assert!(s.is_finite() && (0.0..=1.0).contains(&s));
            }
        }
    }

    #[test]
    fn cosine_values() {
        let m = matrix(&[("A", "ninja village"), ("B", "ninja war"), ("C", "romance")]);
        assert!((m.get(0, 1).unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(m.get(0, 2), Some(0.0));
    }

    #[test]
    fn identical_text_scores_one() {
        let m = matrix(&[("A", "Magic  school"), ("B", "magic school"), ("C", "schools magical")]);
        assert_eq!(m.get(0, 1), Some(1.0));
    }

    #[test]
    fn zero_vectors_score_zero() {
        let m = matrix(&[("A", "the"), ("B", "the")]);
        assert_eq!(m.get(0, 1), Some(0.0));
        assert!(m.row(0).unwrap().iter().all(|s| *s == 0.0));
    }

    #[test]
    fn consistency_needs_square_scores_in_range() {
        let m = matrix(&[("A", "mecha"), ("B", "mecha pilot")]);
        assert!(m.is_consistent());
        assert!(SimilarityMatrix::default().is_consistent());

        let short = SimilarityMatrix { n: 2, scores: vec![1.0, 0.5, 0.5] };
        assert!(!short.is_consistent());
        let nan = SimilarityMatrix { n: 1, scores: vec![f64::NAN] };
        assert!(!nan.is_consistent());
    }

    #[test]
    fn out_of_range_access() {
        let m = matrix(&[("A", "mecha")]);
        assert_eq!(m.get(0, 1), None);
        assert!(m.row(1).is_none());
        assert!(SimilarityMatrix::build(&[]).is_empty());
    }
}
