// ABOUTME: JobPosting struct holding fields extracted from a job-posting page.
// ABOUTME: Every field is independently optional; the empty string means unknown.

use serde::{Deserialize, Serialize};

/// The result of extracting a job posting, one best-effort field record.
///
/// A fully empty record is a valid outcome meaning "nothing matched; fall
/// back to manual entry". The record has no identity and is never retained
/// by the extractor.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct JobPosting {
    pub company: String,
    pub position: String,
    pub location: String,
    pub description: String,
    pub salary: String,
}

impl JobPosting {
    /// Returns true if no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.company.is_empty()
            && self.position.is_empty()
            && self.location.is_empty()
            && self.description.is_empty()
            && self.salary.is_empty()
    }

    /// Returns true if the record has a company.
    pub fn has_company(&self) -> bool {
        !self.company.is_empty()
    }

    /// Returns true if the record has a position.
    pub fn has_position(&self) -> bool {
        !self.position.is_empty()
    }
}
