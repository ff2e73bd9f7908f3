//! Text-to-vector pipeline: term normalization, vocabulary selection,
//! per-item count vectors and the pairwise similarity matrix.
pub mod analyzer;
pub mod corpus;
pub mod feature;
pub mod similarity;
pub mod stem;
pub mod stop_words;
pub mod term;
pub mod vocabulary;
