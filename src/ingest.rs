//! Catalog ingestion.
//!
//! Reads the `anime_with_synopsis.csv` layout (`Name`, `Score`, `Genres`,
//! `sypnopsis` columns), drops incomplete and duplicate rows, coerces the
//! score, and produces the `(name, feature_text)` pairs the engine is built from.

use std::{collections::HashSet, fs::File, io::Read, path::Path};

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::IngestError;

const NAME: &str = "Name";
const GENRES: &str = "Genres";
const SYNOPSIS: &[&str] = &["sypnopsis", "synopsis"];
const SCORE: &str = "Score";

/// One cleaned catalog row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub genres: String,
    pub synopsis: String,
    pub score: f64,
}

impl CatalogEntry {
    /// Genre words followed by synopsis words, single-space separated
    pub fn feature_text(&self) -> String {
        self.genres
            .split_whitespace()
            .chain(self.synopsis.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Cleaned catalog in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

/// Load and clean a catalog CSV file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, IngestError> {
    let path = path.as_ref();
    let catalog = read_catalog(File::open(path)?)?;
    info!(path = %path.display(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse and clean catalog CSV from any reader
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog, IngestError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(IngestError::MissingColumn(name))
    };
    let name_col = column(NAME)?;
    let genres_col = column(GENRES)?;
    let score_col = column(SCORE)?;
    let synopsis_col = SYNOPSIS
        .iter()
        .find_map(|name| column(*name).ok())
        .ok_or(IngestError::MissingColumn(SYNOPSIS[0]))?;

    let mut rows: Vec<(CatalogEntry, Option<f64>)> = Vec::new();
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut incomplete = 0usize;
    let mut duplicates = 0usize;
    for record in reader.records() {
        let record = record?;
        let field = |col: usize| record.get(col).map(str::trim).filter(|v| !v.is_empty());
        let (Some(name), Some(genres), Some(synopsis), Some(score)) = (
            field(name_col),
            field(genres_col),
            field(synopsis_col),
            field(score_col),
        ) else {
            incomplete += 1;
            continue;
        };
        if !seen.insert(record.iter().map(str::to_string).collect()) {
            duplicates += 1;
            continue;
        }
        rows.push((
            CatalogEntry {
                name: name.to_string(),
                genres: genres.to_string(),
                synopsis: synopsis.to_string(),
                score: 0.0,
            },
            parse_score(score),
        ));
    }

    let median = median(rows.iter().filter_map(|(_, score)| *score).collect());
    let unparsed = rows.iter().filter(|(_, score)| score.is_none()).count();
    if incomplete > 0 || duplicates > 0 || unparsed > 0 {
        warn!(incomplete, duplicates, unparsed, median, "catalog rows cleaned");
    }
    let entries = rows
        .into_iter()
        .map(|(mut entry, score)| {
            entry.score = score.unwrap_or(median);
            entry
        })
        .collect();
    Ok(Catalog { entries })
}

/// "Unknown" scores count as 0; anything else that is not a number is missing
fn parse_score(raw: &str) -> Option<f64> {
    if raw == "Unknown" {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_unstable_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, feature_text)` pairs for `build_engine`
    pub fn pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.name.clone(), entry.feature_text()))
    }

    /// The `n` best-scored entries; equal scores keep file order
    pub fn top_rated(&self, n: usize) -> Vec<&CatalogEntry> {
        let mut ranked: Vec<&CatalogEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
MAL_ID,Name,Score,Genres,sypnopsis
1,Cowboy Bebop,8.78,\"Action, Adventure, Comedy\",\"In the year 2071, humanity has colonized...\"
5,Trigun,Unknown,\"Action, Sci-Fi\",Vash the Stampede is the man with a $60 billion bounty.
6,Witch Hunter Robin,7.27,\"Action, Mystery\",
7,Bouken Ou Beet,6.93,\"Adventure, Fantasy\",It is the dark century.
7,Bouken Ou Beet,6.93,\"Adventure, Fantasy\",It is the dark century.
8,Monster,n/a,\"Drama, Mystery\",Dr. Kenzou Tenma is a surgeon.
";

    #[test]
    fn cleans_rows() {
        let catalog = read_catalog(CSV.as_bytes()).unwrap();
        let names: Vec<&str> = catalog.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Cowboy Bebop", "Trigun", "Bouken Ou Beet", "Monster"]);
    }

    #[test]
    fn coerces_scores() {
        let catalog = read_catalog(CSV.as_bytes()).unwrap();
        let scores: Vec<f64> = catalog.entries.iter().map(|e| e.score).collect();
        // parsed: 8.78, 0.0, 6.93 -> median 6.93 fills "n/a"
        assert_eq!(scores, vec![8.78, 0.0, 6.93, 6.93]);
    }

    #[test]
    fn feature_text_is_genres_then_synopsis() {
        let catalog = read_catalog(CSV.as_bytes()).unwrap();
        let pairs: Vec<(String, String)> = catalog.pairs().collect();
        assert_eq!(pairs[2].0, "Bouken Ou Beet");
        assert_eq!(pairs[2].1, "Adventure, Fantasy It is the dark century.");
    }

    #[test]
    fn top_rated_is_stable() {
        let catalog = read_catalog(CSV.as_bytes()).unwrap();
        let top: Vec<&str> = catalog.top_rated(3).into_iter().map(|e| e.name.as_str()).collect();
        assert_eq!(top, vec!["Cowboy Bebop", "Bouken Ou Beet", "Monster"]);
    }

    #[test]
    fn accepts_corrected_synopsis_header() {
        let csv = "Name,Genres,synopsis,Score\nA,Drama,Text,7\n";
        let catalog = read_catalog(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries[0].score, 7.0);
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Name,Score\nA,7\n";
        assert!(matches!(
            read_catalog(csv.as_bytes()),
            Err(IngestError::MissingColumn("Genres"))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_catalog(dir.path().join("absent.csv")),
            Err(IngestError::Io(_))
        ));
    }

    #[test]
    fn median_of_even_count() {
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(vec![]), 0.0);
    }
}
