use anyhow::{bail, Result};
use anirec::{RecommendError, Recommendations};

use crate::cli::Source;

pub fn run(source: &Source, name: &str, k: usize, scores: bool) -> Result<()> {
    let engine = super::engine(source)?;
    match engine.recommend_scored(name, k) {
        Ok(recs) => print!("{}", render(name, k, &recs, scores)),
        Err(RecommendError::NotFound { name }) => {
            bail!("Anime not found: {name:?}. Titles must match exactly.")
        }
    }
    Ok(())
}

/// Text printed for a successful query
fn render(name: &str, k: usize, recs: &Recommendations, scores: bool) -> String {
    if k == 0 {
        String::new()
    } else if recs.is_empty() {
        format!("No other titles to compare with {name:?}.\n")
    } else if scores {
        format!("{recs:#}")
    } else {
        format!("{recs}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anirec::{build_engine, EngineConfig};

    #[test]
    fn zero_k_prints_nothing() {
        let engine = build_engine([("A", "mecha"), ("B", "mecha")], &EngineConfig::default());
        let recs = engine.recommend_scored("A", 0).unwrap();
        assert_eq!(render("A", 0, &recs, false), "");
    }

    #[test]
    fn lone_title_has_nothing_to_compare() {
        let engine = build_engine([("A", "mecha")], &EngineConfig::default());
        let recs = engine.recommend_scored("A", 5).unwrap();
        assert_eq!(
            render("A", 5, &recs, false),
            "No other titles to compare with \"A\".\n"
        );
    }

    #[test]
    fn ranked_titles_with_and_without_scores() {
        let engine = build_engine([("A", "mecha"), ("B", "mecha")], &EngineConfig::default());
        let recs = engine.recommend_scored("A", 5).unwrap();
        assert_eq!(render("A", 5, &recs, false), "  1. B\n");
        assert_eq!(render("A", 5, &recs, true), "  1. B (1.0000)\n");
    }
}
