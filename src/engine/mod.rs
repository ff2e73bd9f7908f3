pub mod recommend;
pub mod snapshot;

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    config::EngineConfig,
    vectorizer::{
        corpus::Corpus, feature::FeatureVector, similarity::SimilarityMatrix,
        vocabulary::Vocabulary,
    },
};

/// Built recommendation engine.
///
/// Holds the corpus, the vocabulary, one feature vector per item and the
/// full similarity matrix. Everything is computed once by [`Engine::build`]
/// and never mutated afterwards, so an `Engine` can be shared across threads
/// and queried without locking. A changed catalog means building a new engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    corpus: Corpus,
    vocabulary: Vocabulary,
    vectors: Vec<FeatureVector>,
    similarity: SimilarityMatrix,
    top_k: usize,
}

/// Build an engine from cleaned `(name, feature_text)` pairs
pub fn build_engine<I, S, T>(pairs: I, config: &EngineConfig) -> Engine
where
    I: IntoIterator<Item = (S, T)>,
    S: Into<String>,
    T: Into<String>,
{
    Engine::build(Corpus::from_pairs(pairs), config)
}

impl Engine {
    /// Vocabulary -> vectors -> similarity matrix
    pub fn build(corpus: Corpus, config: &EngineConfig) -> Self {
        let started = Instant::now();
        if corpus.is_empty() {
            warn!("building engine from an empty corpus; every query will miss");
        }
        if corpus.duplicate_num() > 0 {
            warn!(
                duplicates = corpus.duplicate_num(),
                "duplicate item names; only the first of each is reachable by name"
            );
        }

        let vocabulary = Vocabulary::build(corpus.items(), &config.stop_words, config.max_terms);
        let vectors = FeatureVector::vectorize_all(corpus.items(), &vocabulary);
        let similarity = SimilarityMatrix::build(&vectors);

        info!(
            items = corpus.len(),
            terms = vocabulary.len(),
            zero_vectors = vectors.iter().filter(|v| v.is_zero()).count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "engine built"
        );
        Self {
            corpus,
            vocabulary,
            vectors,
            similarity,
            top_k: config.top_k,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vectors(&self) -> &[FeatureVector] {
        &self.vectors
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Default number of recommendations
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Similarity between two named items
    pub fn score(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.corpus.id_of(a)?;
        let j = self.corpus.id_of(b)?;
        self.similarity.get(i, j)
    }
}
