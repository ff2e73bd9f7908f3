/// This crate is a content-similarity recommendation engine for anime catalogs.
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod utils;
pub mod vectorizer;

/// Recommendation Engine
/// The top-level struct of this crate. It is built once from a catalog of
/// `(name, feature_text)` pairs and then answers "what is similar to X"
/// queries against a precomputed similarity matrix.
///
/// Internally, it holds:
/// - The corpus (items in insertion order and a name index)
/// - The bounded, frequency-ranked vocabulary
/// - One sparse term-count vector per item
/// - The dense, symmetric cosine-similarity matrix
///
/// The engine is immutable after build and `Send + Sync`, so it can be
/// shared between threads without locking. Rebuild it when the catalog changes.
///
/// # Serialization
/// Supported through CBOR snapshots (`Engine::save` / `Engine::load`).
pub use engine::{build_engine, Engine};

/// Ranked recommendations with their similarity scores
pub use engine::recommend::Recommendations;

/// Build configuration: vocabulary bound, default top-K and stop words
pub use config::EngineConfig;

/// Error types
/// - `RecommendError`: the queried name is not in the catalog
/// - `IngestError`: the catalog file could not be read or lacks a column
/// - `PersistError`: a snapshot could not be written or read back
pub use error::{IngestError, PersistError, RecommendError};

/// Catalog ingestion from the `anime_with_synopsis.csv` layout
pub use ingest::{load_catalog, Catalog, CatalogEntry};

/// Stop-word sets used when selecting the vocabulary
pub use vectorizer::stop_words::StopWords;

/// Term normalization (lower-case + Porter stemming)
pub use vectorizer::stem::normalize;
