// Profile classification — free text to controlled-vocabulary tags.
//
// Each supervisor row carries free-text "Methods" and "Research Focus" fields
// plus manually pre-tagged method/topic columns. Free text is split into
// fragments and every vocabulary keyword found *inside* a fragment is
// recorded. Pre-tagged values are trusted verbatim and unioned in.
//
// Matching is substring containment of the keyword in the fragment, so a
// short keyword like "vr" matches any fragment containing those letters.
// Tightening this changes which supervisors appear under a filter, so it is
// left as-is until the vocabulary owner decides otherwise.

pub mod profile;

use std::collections::BTreeSet;

pub use profile::{Profile, SupervisorRecord};

use crate::vocabulary::{normalize, Vocabulary};

/// Split on `;` or `,`, trim and lower-case each piece, drop empty pieces.
pub fn split_fragments(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split([';', ','])
        .map(|piece| piece.trim().to_lowercase())
        .filter(|piece| !piece.is_empty())
}

/// Every keyword that occurs as a substring of some fragment of `raw_text`.
///
/// `keywords` are expected lower-case (see [`crate::vocabulary::flatten`]).
pub fn find_matches(raw_text: &str, keywords: &BTreeSet<String>) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for fragment in split_fragments(raw_text) {
        for keyword in keywords {
            if fragment.contains(keyword.as_str()) {
                found.insert(keyword.clone());
            }
        }
    }
    found
}

/// Parse a pre-tagged or discipline column into a lower-cased set.
///
/// Values go through the misspelling corrections but are never checked
/// against a vocabulary.
pub fn parse_tagged(raw: &str) -> BTreeSet<String> {
    raw.split([';', ','])
        .map(|piece| normalize(piece).to_lowercase())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Build the profile for one supervisor row. Never fails; empty or
/// unparseable fields just contribute nothing.
pub fn classify(row: &SupervisorRecord, vocabulary: &Vocabulary) -> Profile {
    let mut methods = find_matches(&row.methods, vocabulary.method_keywords());
    methods.extend(parse_tagged(&row.hlt_methods));

    let mut topics = find_matches(&row.research_focus, vocabulary.topic_keywords());
    topics.extend(parse_tagged(&row.hlt_topics));

    Profile {
        categories: parse_tagged(&row.discipline).into_iter().collect(),
        topics: topics.into_iter().collect(),
        methods: methods.into_iter().collect(),
        info: profile::info_line(&row.hlt_topics),
        contact: profile::CONTACT_PLACEHOLDER.to_string(),
        publications: profile::PUBLICATIONS_PLACEHOLDER.to_string(),
    }
}
