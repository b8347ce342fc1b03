// JSON vocabulary file — lets the vocabulary owner extend or correct the
// hierarchies without a rebuild.
//
// Categories are an array rather than an object so their display order
// survives a round-trip through serde_json.
//
// {
//   "methods": [{ "category": "Quan", "keywords": ["surveys", "Big Data"] }],
//   "topics":  [{ "category": "Memory", "keywords": ["Episodic memory"] }]
// }

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{build_hierarchy, Hierarchy, Vocabulary};

#[derive(Debug, Deserialize)]
pub struct VocabularyFile {
    pub methods: Vec<CategoryEntry>,
    pub topics: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryEntry {
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

fn hierarchy_from_entries(entries: &[CategoryEntry]) -> Result<Hierarchy> {
    build_hierarchy(
        entries
            .iter()
            .map(|e| (e.category.as_str(), e.keywords.iter().map(String::as_str))),
    )
}

/// Parse a vocabulary from JSON text.
pub fn parse(json: &str) -> Result<Vocabulary> {
    let file: VocabularyFile =
        serde_json::from_str(json).context("Invalid vocabulary JSON")?;
    let methods = hierarchy_from_entries(&file.methods).context("In \"methods\"")?;
    let topics = hierarchy_from_entries(&file.topics).context("In \"topics\"")?;
    Ok(Vocabulary::new(methods, topics))
}

/// Read and parse a vocabulary file.
pub fn load(path: &Path) -> Result<Vocabulary> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read vocabulary file {}", path.display()))?;
    parse(&json).with_context(|| format!("Failed to load vocabulary from {}", path.display()))
}
