// Supervisor input rows and output profiles.

use serde::{Deserialize, Serialize};

pub const CONTACT_PLACEHOLDER: &str = "Contact not available";
pub const PUBLICATIONS_PLACEHOLDER: &str = "#";

/// One row of the supervisors sheet. Absent columns are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SupervisorRecord {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Discipline/s", default)]
    pub discipline: String,
    /// Free-text description of methods used.
    #[serde(rename = "Methods", default)]
    pub methods: String,
    /// Free-text research focus.
    #[serde(rename = "Research Focus", default)]
    pub research_focus: String,
    /// Manually assigned method keywords.
    #[serde(rename = "HLT methods", default)]
    pub hlt_methods: String,
    /// Manually assigned topic keywords (higher level themes).
    #[serde(rename = "Higher Level Themes : Research focus", default)]
    pub hlt_topics: String,
}

/// The classified, display-ready profile of one supervisor.
///
/// Field names match the keys the listing page reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    #[serde(rename = "Categories")]
    pub categories: Vec<String>,
    #[serde(rename = "Topics")]
    pub topics: Vec<String>,
    #[serde(rename = "Methods")]
    pub methods: Vec<String>,
    pub info: String,
    pub contact: String,
    pub publications: String,
}

impl Profile {
    pub fn has_category(&self, category: &str) -> bool {
        contains_folded(&self.categories, category)
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        contains_folded(&self.topics, topic)
    }

    pub fn has_method(&self, method: &str) -> bool {
        contains_folded(&self.methods, method)
    }
}

/// Tag lists are stored lower-cased; compare against a lower-cased needle.
fn contains_folded(tags: &[String], needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    tags.iter().any(|t| *t == needle)
}

/// The card blurb. Embeds the raw themes field verbatim.
pub fn info_line(themes: &str) -> String {
    format!("Focuses on {themes}.")
}
