use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{engine::Engine, error::PersistError};

/// Snapshot format version; bump when the engine layout changes
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of an engine.
/// The engine itself is kept as a raw CBOR value so the version can be
/// checked before its layout is interpreted.
#[derive(Debug, Deserialize)]
struct Snapshot {
    version: u32,
    engine: serde_cbor::Value,
}

#[derive(Debug, Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    engine: &'a Engine,
}

impl Engine {
    /// Encode the built engine as CBOR
    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistError> {
        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            engine: self,
        };
        Ok(serde_cbor::to_vec(&snapshot)?)
    }

    /// Decode an engine produced by [`Engine::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistError> {
        let snapshot: Snapshot = serde_cbor::from_slice(bytes)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistError::Version {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        let engine: Engine = serde_cbor::value::from_value(snapshot.engine)?;
        engine.check_consistency()?;
        Ok(engine)
    }

    /// Reject decoded engines whose parts disagree on sizes or ordering,
    /// which queries would otherwise index out of bounds on.
    fn check_consistency(&self) -> Result<(), PersistError> {
        let items = self.corpus.len();
        let inconsistent = |what: String| Err(PersistError::Inconsistent(what));
        if !self.corpus.is_consistent() {
            return inconsistent("corpus ids or name index are out of order".to_string());
        }
        if self.vectors.len() != items {
            return inconsistent(format!("{} vectors for {items} items", self.vectors.len()));
        }
        if self.similarity.len() != items || !self.similarity.is_consistent() {
            return inconsistent(format!(
                "similarity matrix does not cover {items} items with scores in [0, 1]"
            ));
        }
        let terms = self.vocabulary.len();
        if let Some(id) = self
            .vectors
            .iter()
            .position(|v| v.len() != terms || !v.counts().is_consistent())
        {
            return inconsistent(format!("vector {id} does not fit a {terms}-term vocabulary"));
        }
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "engine snapshot saved");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let path = path.as_ref();
        let engine = Self::from_bytes(&fs::read(path)?)?;
        info!(path = %path.display(), items = engine.corpus().len(), "engine snapshot loaded");
        Ok(engine)
    }
}
