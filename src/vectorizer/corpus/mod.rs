use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One catalog entry.
/// `id` is the insertion position and doubles as the similarity matrix row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: usize,
    pub name: String,
    pub feature_text: String,
}

/// Ordered items plus a name -> id index.
///
/// Names are expected to be unique. When a name repeats, the index keeps the
/// first occurrence and later items with that name can only be reached by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    items: Vec<Item>,
    #[serde(with = "indexmap::map::serde_seq")]
    name_index: IndexMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, feature_text)` pairs in order
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut corpus = Self::new();
        for (name, feature_text) in pairs {
            corpus.push(name.into(), feature_text.into());
        }
        corpus
    }

    fn push(&mut self, name: String, feature_text: String) {
        let id = self.items.len();
        if let Some(&first) = self.name_index.get(&name) {
            debug!(name = %name, first_id = first, duplicate_id = id, "duplicate item name, keeping first occurrence");
        } else {
            self.name_index.insert(name.clone(), id);
        }
        self.items.push(Item {
            id,
            name,
            feature_text,
        });
    }

    /// id of the first item named `name` (exact, case-sensitive)
    #[inline]
    pub fn id_of(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    #[inline]
    pub fn get(&self, id: usize) -> Option<&Item> {
        self.items.get(id)
    }

    #[inline]
    pub fn name(&self, id: usize) -> Option<&str> {
        self.items.get(id).map(|item| item.name.as_str())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct names
    pub fn name_num(&self) -> usize {
        self.name_index.len()
    }

    /// true when every id equals its position and every indexed name points
    /// at an item carrying that name
    pub fn is_consistent(&self) -> bool {
        self.items.iter().enumerate().all(|(pos, item)| item.id == pos)
            && self
                .name_index
                .iter()
                .all(|(name, &id)| self.name(id) == Some(name.as_str()))
    }

    /// Number of items shadowed by an earlier item with the same name
    pub fn duplicate_num(&self) -> usize {
        self.items.len() - self.name_index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_insertion_order() {
        let corpus = Corpus::from_pairs([("A", "x"), ("B", "y"), ("C", "z")]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.name_num(), 3);
        assert_eq!(corpus.id_of("B"), Some(1));
        assert_eq!(corpus.name(2), Some("C"));
        assert_eq!(corpus.get(0).map(|i| i.feature_text.as_str()), Some("x"));
        assert!(corpus.iter().enumerate().all(|(pos, item)| pos == item.id));
    }

    #[test]
    fn lookup_is_exact() {
        let corpus = Corpus::from_pairs([("Naruto", "ninja")]);
        assert_eq!(corpus.id_of("naruto"), None);
        assert_eq!(corpus.id_of("Naruto "), None);
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let corpus = Corpus::from_pairs([("A", "one"), ("B", "two"), ("A", "three")]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.name_num(), 2);
        assert_eq!(corpus.duplicate_num(), 1);
        assert_eq!(corpus.id_of("A"), Some(0));
        assert_eq!(corpus.name(2), Some("A"));
    }

    #[test]
    fn consistency_of_ids_and_index() {
        let corpus = Corpus::from_pairs([("A", "one"), ("B", "two"), ("A", "three")]);
        assert!(corpus.is_consistent());

        let mut shifted = corpus.clone();
        shifted.items[1].id = 5;
        assert!(!shifted.is_consistent());

        let mut dangling = corpus;
        dangling.name_index.insert("C".to_string(), 7);
        assert!(!dangling.is_consistent());
    }

    #[test]
    fn empty_corpus() {
        let corpus = Corpus::from_pairs(Vec::<(String, String)>::new());
        assert!(corpus.is_empty());
        assert_eq!(corpus.id_of("anything"), None);
    }
}
