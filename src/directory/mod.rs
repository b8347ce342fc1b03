// Directory — the classified supervisor listing, built once at startup.
//
// `LoadState` replaces a process-wide global: the loader returns either the
// full directory or the reason it is unavailable, and the caller hands that
// value to whatever serves requests. Nothing mutates it afterwards.

pub mod filter;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::classify::{classify, Profile, SupervisorRecord};
use crate::source::{read_records, SourceError};
use crate::vocabulary::{Hierarchy, Vocabulary};

pub use filter::SupervisorFilter;

/// Supervisor name -> profile, in sheet row order.
pub type Profiles = IndexMap<String, Profile>;

/// Classify every record. A repeated name keeps its first row's position
/// but takes the later row's data.
pub fn build_profiles(records: &[SupervisorRecord], vocabulary: &Vocabulary) -> Profiles {
    let mut profiles = Profiles::new();
    for record in records {
        let profile = classify(record, vocabulary);
        if profiles.insert(record.name.clone(), profile).is_some() {
            warn!(name = %record.name, "Duplicate supervisor name, keeping the later row");
        }
    }
    profiles
}

/// A loaded, classified directory.
#[derive(Debug, Clone)]
pub struct Directory {
    pub profiles: Profiles,
    pub vocabulary: Vocabulary,
    pub source_path: PathBuf,
    pub loaded_at: DateTime<Utc>,
}

impl Directory {
    pub fn new(profiles: Profiles, vocabulary: Vocabulary, source_path: PathBuf) -> Self {
        Self {
            profiles,
            vocabulary,
            source_path,
            loaded_at: Utc::now(),
        }
    }

    /// Every discipline that appears on at least one profile, sorted.
    pub fn categories(&self) -> Vec<String> {
        let all: BTreeSet<&String> = self
            .profiles
            .values()
            .flat_map(|p| p.categories.iter())
            .collect();
        all.into_iter().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Profiles passing `filter`, in sheet order.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a SupervisorFilter,
    ) -> impl Iterator<Item = (&'a String, &'a Profile)> + 'a {
        self.profiles
            .iter()
            .filter(move |(name, profile)| filter.matches(name, profile))
    }

    /// The full read-only view handed to presentation layers.
    pub fn view(&self) -> DirectoryView<'_> {
        DirectoryView {
            supervisors: &self.profiles,
            categories: self.categories(),
            topic_hierarchy: &self.vocabulary.topics,
            method_hierarchy: &self.vocabulary.methods,
            all_topics_flat: self.vocabulary.topics.filter_terms(),
            all_methods_flat: self.vocabulary.methods.filter_terms(),
            topic_keywords: self.vocabulary.topic_keywords().iter().cloned().collect(),
            method_keywords: self.vocabulary.method_keywords().iter().cloned().collect(),
            loaded_at: self.loaded_at.to_rfc3339(),
        }
    }
}

/// Serializable snapshot of everything the listing page renders from.
#[derive(Debug, Serialize)]
pub struct DirectoryView<'a> {
    pub supervisors: &'a Profiles,
    pub categories: Vec<String>,
    pub topic_hierarchy: &'a Hierarchy,
    pub method_hierarchy: &'a Hierarchy,
    /// Category names and keywords, lower-cased: the filter checkbox terms.
    pub all_topics_flat: Vec<String>,
    pub all_methods_flat: Vec<String>,
    /// The flattened matching vocabularies, sorted.
    pub topic_keywords: Vec<String>,
    pub method_keywords: Vec<String>,
    pub loaded_at: String,
}

/// Outcome of the one-shot startup load.
#[derive(Debug)]
pub enum LoadState {
    Loaded(Directory),
    Unavailable(SourceError),
}

impl LoadState {
    /// Read and classify the sheet at `path`.
    ///
    /// Never returns an error: an unreadable source becomes `Unavailable`
    /// and is logged. There is no retry; fix the file and restart.
    pub fn load(path: &Path, vocabulary: Vocabulary) -> Self {
        match read_records(path) {
            Ok(records) => {
                let profiles = build_profiles(&records, &vocabulary);
                info!(
                    path = %path.display(),
                    rows = records.len(),
                    supervisors = profiles.len(),
                    "Supervisor directory loaded"
                );
                LoadState::Loaded(Directory::new(profiles, vocabulary, path.to_path_buf()))
            }
            Err(e) => {
                error!(error = %e, "Supervisor directory unavailable");
                LoadState::Unavailable(e)
            }
        }
    }

    pub fn directory(&self) -> Option<&Directory> {
        match self {
            LoadState::Loaded(dir) => Some(dir),
            LoadState::Unavailable(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, discipline: &str) -> SupervisorRecord {
        SupervisorRecord {
            name: name.to_string(),
            discipline: discipline.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_duplicate_name_last_row_wins() {
        let vocab = Vocabulary::builtin().unwrap();
        let records = vec![record("Dr Kim", "Cognition"), record("Dr Kim", "Social")];
        let profiles = build_profiles(&records, &vocab);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles["Dr Kim"].categories, ["social"]);
    }

    #[test]
    fn test_duplicate_name_keeps_first_position() {
        let vocab = Vocabulary::builtin().unwrap();
        let records = vec![
            record("Zed", "Cognition"),
            record("Ann", "Memory"),
            record("Zed", "Social"),
        ];
        let profiles = build_profiles(&records, &vocab);
        let names: Vec<&str> = profiles.keys().map(String::as_str).collect();
        assert_eq!(names, ["Zed", "Ann"]);
        assert_eq!(profiles["Zed"].categories, ["social"]);
    }

    #[test]
    fn test_categories_union_across_profiles() {
        let vocab = Vocabulary::builtin().unwrap();
        let records = vec![
            record("A", "Social; Cognition"),
            record("B", "cognition, Developmental"),
        ];
        let dir = Directory::new(build_profiles(&records, &vocab), vocab, PathBuf::new());
        assert_eq!(dir.categories(), ["cognition", "developmental", "social"]);
    }

    #[test]
    fn test_load_missing_file_is_unavailable() {
        let vocab = Vocabulary::builtin().unwrap();
        let state = LoadState::load(Path::new("/nonexistent/HLT.csv"), vocab);
        assert!(!state.is_loaded());
        assert!(state.directory().is_none());
    }
}
