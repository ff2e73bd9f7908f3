use serde::{Deserialize, Serialize};

use crate::vectorizer::{stem::normalize, stop_words::StopWords};

/// Turns item text into terms.
/// Splits on whitespace, normalizes each token, and drops empty terms and
/// terms listed in the stop words. Only the normalized term is checked, so
/// "has" survives as "ha".
///
/// The vocabulary builder and the vectorizer share one `Analyzer` so both
/// see exactly the same term stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Analyzer {
    stop_words: StopWords,
}

impl Analyzer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Terms of `text` in order of appearance
    pub fn terms<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split_whitespace()
            .map(normalize)
            .filter(move |term| !term.is_empty() && !self.stop_words.contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_after_stemming() {
        let analyzer = Analyzer::new(StopWords::english());
        let terms: Vec<String> = analyzer
            .terms("The  heroes WERE running\tinto battles")
            .collect();
        assert_eq!(terms, vec!["hero", "run", "battl"]);
    }

    #[test]
    fn stems_of_stop_words_are_kept_when_not_listed() {
        let analyzer = Analyzer::new(StopWords::english());
        let terms: Vec<String> = analyzer.terms("has becoming hero was").collect();
        assert_eq!(terms, vec!["ha", "becom", "hero", "wa"]);
    }

    #[test]
    fn without_stop_words_keeps_everything() {
        let analyzer = Analyzer::new(StopWords::none());
        let terms: Vec<String> = analyzer.terms("the cats").collect();
        assert_eq!(terms, vec!["the", "cat"]);
    }

    #[test]
    fn blank_text_has_no_terms() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.terms("   \n ").count(), 0);
    }
}
