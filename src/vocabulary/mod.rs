// Vocabulary registry — the two controlled vocabularies (methods, topics).
//
// Each vocabulary is a two-level hierarchy: a broad category name mapped to an
// ordered list of specific keyword synonyms. Only the specific keywords take
// part in matching; category names are for display and filtering.

pub mod file;
pub mod tables;

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use tables::RawHierarchy;

/// Known misspellings in the source sheet, applied in order.
const CORRECTIONS: &[(&str, &str)] = &[
    ("Qualatative", "Qualitative"),
    ("Behvaiourial", "Behavioural"),
    ("Stereoypes", "Stereotypes"),
];

/// Correct known misspellings and trim surrounding whitespace.
///
/// Case is preserved; case-folding only happens in the flattened vocabulary
/// and during matching.
pub fn normalize(text: &str) -> String {
    let mut out = text.to_string();
    for (wrong, right) in CORRECTIONS {
        if out.contains(wrong) {
            out = out.replace(wrong, right);
        }
    }
    out.trim().to_string()
}

/// One broad category and its specific keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

/// An ordered category -> keywords mapping.
///
/// Serializes as a JSON object whose keys keep category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    categories: Vec<Category>,
}

impl Hierarchy {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category names plus every keyword, lower-cased and sorted.
    ///
    /// This is the checkbox list for the listing page's filters, which is
    /// broader than the matching vocabulary (it includes category names).
    pub fn filter_terms(&self) -> Vec<String> {
        let terms: BTreeSet<String> = self
            .categories
            .iter()
            .flat_map(|c| std::iter::once(&c.name).chain(c.keywords.iter()))
            .map(|t| t.to_lowercase())
            .collect();
        terms.into_iter().collect()
    }
}

impl Serialize for Hierarchy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.keywords)?;
        }
        map.end()
    }
}

/// Build a normalized hierarchy from raw `(category, keywords)` pairs.
///
/// Category order and keyword order are preserved. Fails on a category name
/// that repeats after normalization, and on a keyword that normalizes to
/// nothing (an empty keyword is a substring of every fragment).
pub fn build_hierarchy<'a, I, K>(raw: I) -> Result<Hierarchy>
where
    I: IntoIterator<Item = (&'a str, K)>,
    K: IntoIterator<Item = &'a str>,
{
    let mut categories: Vec<Category> = Vec::new();
    for (name, keywords) in raw {
        let name = normalize(name);
        if categories.iter().any(|c| c.name == name) {
            anyhow::bail!("Duplicate vocabulary category: {name}");
        }
        let keywords: Vec<String> = keywords.into_iter().map(normalize).collect();
        if keywords.iter().any(String::is_empty) {
            anyhow::bail!("Blank keyword in vocabulary category: {name}");
        }
        categories.push(Category { name, keywords });
    }
    Ok(Hierarchy { categories })
}

/// All specific keywords of a hierarchy, lower-cased. Category names excluded.
pub fn flatten(hierarchy: &Hierarchy) -> BTreeSet<String> {
    hierarchy
        .categories
        .iter()
        .flat_map(|c| c.keywords.iter())
        .map(|k| k.to_lowercase())
        .collect()
}

fn from_table(table: RawHierarchy) -> Result<Hierarchy> {
    build_hierarchy(table.iter().map(|(name, kws)| (*name, kws.iter().copied())))
}

/// Both vocabularies plus their flattened matching sets.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub methods: Hierarchy,
    pub topics: Hierarchy,
    method_keywords: BTreeSet<String>,
    topic_keywords: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new(methods: Hierarchy, topics: Hierarchy) -> Self {
        let method_keywords = flatten(&methods);
        let topic_keywords = flatten(&topics);
        Self {
            methods,
            topics,
            method_keywords,
            topic_keywords,
        }
    }

    /// The compiled-in HLT vocabularies.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            from_table(tables::METHODS)?,
            from_table(tables::TOPICS)?,
        ))
    }

    /// Load vocabularies from a JSON file (see [`file::VocabularyFile`]).
    pub fn from_path(path: &Path) -> Result<Self> {
        file::load(path)
    }

    /// Use the file at `path` when given, otherwise the built-in tables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::builtin(),
        }
    }

    pub fn method_keywords(&self) -> &BTreeSet<String> {
        &self.method_keywords
    }

    pub fn topic_keywords(&self) -> &BTreeSet<String> {
        &self.topic_keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_fixes_misspellings() {
        assert_eq!(normalize("Qualatative"), "Qualitative");
        assert_eq!(normalize(" Behvaiourial experiments "), "Behavioural experiments");
        assert_eq!(normalize("Stereoypes"), "Stereotypes");
    }

    #[test]
    fn test_normalize_preserves_case() {
        assert_eq!(normalize("  Big Data "), "Big Data");
    }

    #[test]
    fn test_build_hierarchy_rejects_duplicate_after_normalize() {
        let raw = vec![
            ("Stereotypes", vec!["prejudice"]),
            ("Stereoypes ", vec!["discrimination"]),
        ];
        assert!(build_hierarchy(raw).is_err());
    }

    #[test]
    fn test_flatten_excludes_category_names() {
        let h = build_hierarchy(vec![("Cultural", vec!["Pacific", "culture"])]).unwrap();
        let flat = flatten(&h);
        assert!(flat.contains("pacific"));
        assert!(flat.contains("culture"));
        assert!(!flat.contains("cultural"));
    }

    #[test]
    fn test_hierarchy_serializes_in_category_order() {
        let h = build_hierarchy(vec![("Zeta", vec!["z"]), ("Alpha", vec!["a"])]).unwrap();
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"Zeta":["z"],"Alpha":["a"]}"#);
    }

    #[test]
    fn test_builtin_tables_are_well_formed() {
        let vocab = Vocabulary::builtin().unwrap();
        assert_eq!(vocab.methods.len(), tables::METHODS.len());
        assert_eq!(vocab.topics.len(), tables::TOPICS.len());
    }
}
