use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::Source;

pub fn run(source: &Source, out: &Path) -> Result<()> {
    let engine = super::engine(source)?;
    engine
        .save(out)
        .with_context(|| format!("writing snapshot {}", out.display()))?;
    println!(
        "Saved {} titles and {} terms to {}",
        engine.corpus().len(),
        engine.vocabulary().len(),
        out.display()
    );
    Ok(())
}
