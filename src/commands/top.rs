use anyhow::{Context, Result};
use anirec::load_catalog;
use tracing::warn;

use crate::cli::Source;

pub fn run(source: &Source, n: usize) -> Result<()> {
    let ignored = source.ignored_flags(false);
    if !ignored.is_empty() {
        warn!(
            flags = ?ignored,
            catalog = %source.data.display(),
            "snapshots carry no scores; reading the catalog instead"
        );
    }
    let catalog = load_catalog(&source.data)
        .with_context(|| format!("loading catalog {}", source.data.display()))?;
    for (rank, entry) in catalog.top_rated(n).into_iter().enumerate() {
        println!("{:>3}. {} ({:.2})", rank + 1, entry.name, entry.score);
    }
    Ok(())
}
