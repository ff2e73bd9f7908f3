//! Engine build configuration

use serde::{Deserialize, Serialize};

use crate::vectorizer::stop_words::StopWords;

/// Default vocabulary bound
pub const DEFAULT_MAX_TERMS: usize = 5000;
/// Default number of recommendations
pub const DEFAULT_TOP_K: usize = 99;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on vocabulary size
    pub max_terms: usize,

    /// Recommendations returned by `Engine::recommend_default`
    pub top_k: usize,

    /// Terms excluded from the vocabulary
    pub stop_words: StopWords,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            max_terms: DEFAULT_MAX_TERMS,
            top_k: DEFAULT_TOP_K,
            stop_words: StopWords::english(),
        }
    }

    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
