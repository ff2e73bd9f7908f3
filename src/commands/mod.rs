pub mod build;
pub mod recommend;
pub mod top;

use anyhow::{Context, Result};
use anirec::{
    build_engine, config::DEFAULT_MAX_TERMS, load_catalog, Engine, EngineConfig, StopWords,
};
use tracing::warn;

use crate::cli::Source;

impl Source {
    pub fn config(&self) -> EngineConfig {
        let config = EngineConfig::new().with_max_terms(self.max_terms);
        if self.no_stop_words {
            config.with_stop_words(StopWords::none())
        } else {
            config
        }
    }

    /// Flags given on the command line that a command will not use.
    /// `uses_snapshot` is false for commands that always read the catalog.
    pub fn ignored_flags(&self, uses_snapshot: bool) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if self.engine.is_none() {
            return ignored;
        }
        if !uses_snapshot {
            ignored.push("--engine");
            return ignored;
        }
        if self.max_terms != DEFAULT_MAX_TERMS {
            ignored.push("--max-terms");
        }
        if self.no_stop_words {
            ignored.push("--no-stop-words");
        }
        ignored
    }
}

/// Load the snapshot when one is given, otherwise build from the catalog
pub fn engine(source: &Source) -> Result<Engine> {
    if let Some(path) = &source.engine {
        let ignored = source.ignored_flags(true);
        if !ignored.is_empty() {
            warn!(
                flags = ?ignored,
                snapshot = %path.display(),
                "build flags have no effect on a saved engine"
            );
        }
        return Engine::load(path)
            .with_context(|| format!("loading engine snapshot {}", path.display()));
    }
    let catalog = load_catalog(&source.data)
        .with_context(|| format!("loading catalog {}", source.data.display()))?;
    Ok(build_engine(catalog.pairs(), &source.config()))
}
