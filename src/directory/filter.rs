// Listing filters — shared by GET /api/supervisors and `hlt-directory list`.
//
// category/topic/method are exact tag membership (case-insensitive);
// q is a case-insensitive substring search on the supervisor name.
// All given filters must match.

use serde::Deserialize;

use crate::classify::Profile;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupervisorFilter {
    pub category: Option<String>,
    pub topic: Option<String>,
    pub method: Option<String>,
    pub q: Option<String>,
}

impl SupervisorFilter {
    pub fn matches(&self, name: &str, profile: &Profile) -> bool {
        if let Some(c) = blank(&self.category) {
            if !profile.has_category(c) {
                return false;
            }
        }
        if let Some(t) = blank(&self.topic) {
            if !profile.has_topic(t) {
                return false;
            }
        }
        if let Some(m) = blank(&self.method) {
            if !profile.has_method(m) {
                return false;
            }
        }
        if let Some(q) = blank(&self.q) {
            if !name.to_lowercase().contains(&q.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Treat `Some("")` (e.g. `?topic=`) the same as an absent filter.
fn blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
