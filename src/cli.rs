use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "anirec")]
#[command(version)]
#[command(about = "Recommend anime similar to a title by genre and synopsis")]
pub struct Cli {
    #[command(flatten)]
    pub source: Source,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the engine comes from
#[derive(Args)]
pub struct Source {
    /// Catalog CSV (Name, Score, Genres, sypnopsis columns)
    #[arg(short, long, global = true, default_value = "anime_with_synopsis.csv")]
    pub data: PathBuf,

    /// Prebuilt engine snapshot; skips reading the catalog
    #[arg(short, long, global = true)]
    pub engine: Option<PathBuf>,

    /// Vocabulary size
    #[arg(long, global = true, default_value_t = anirec::config::DEFAULT_MAX_TERMS)]
    pub max_terms: usize,

    /// Keep English stop words in the vocabulary
    #[arg(long, global = true)]
    pub no_stop_words: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List titles similar to NAME (exact, case-sensitive)
    Recommend {
        name: String,

        /// Number of titles to list
        #[arg(short, default_value_t = anirec::config::DEFAULT_TOP_K)]
        k: usize,

        /// Show similarity scores
        #[arg(long)]
        scores: bool,
    },

    /// List the best-scored titles of the catalog
    Top {
        #[arg(short, default_value_t = 10)]
        n: usize,
    },

    /// Build the engine and save a snapshot
    Build {
        #[arg(short, long)]
        out: PathBuf,
    },
}
