// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run reports
//!
//! A run produces one [`GroupReport`] per catalogue group, collected into a
//! [`RunReport`]. These replace ad-hoc "anything new?" counters: printing
//! and exporting both work from the finished report.

pub mod formatter;
pub mod output;

use crate::groups::Group;
use crate::locale::Lang;
use crate::names::NameWarning;
use serde::{Deserialize, Serialize};

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    /// The group file was not found; nothing was done.
    Missing,
    Processed,
}

/// A record that received a new description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<NameWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReport {
    pub group: String,
    pub file_name: String,
    pub status: GroupStatus,
    pub generated: Vec<GeneratedItem>,
    pub skipped_no_name: usize,
    pub skipped_present: usize,
}

impl GroupReport {
    pub fn missing(group: &Group) -> Self {
        Self::new(group, GroupStatus::Missing)
    }

    pub fn processed(group: &Group) -> Self {
        Self::new(group, GroupStatus::Processed)
    }

    fn new(group: &Group, status: GroupStatus) -> Self {
        Self {
            group: group.key.clone(),
            file_name: group.file_name.clone(),
            status,
            generated: Vec::new(),
            skipped_no_name: 0,
            skipped_present: 0,
        }
    }

    pub fn warning_count(&self) -> usize {
        self.generated.iter().map(|item| item.warnings.len()).sum()
    }
}

/// Complete result of one run over the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub created_at: String,
    pub lang: Lang,
    pub force: bool,
    pub groups: Vec<GroupReport>,
}

impl RunReport {
    pub fn new(lang: Lang, force: bool) -> Self {
        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            lang,
            force,
            groups: Vec::new(),
        }
    }

    pub fn total_generated(&self) -> usize {
        self.groups.iter().map(|g| g.generated.len()).sum()
    }

    pub fn total_warnings(&self) -> usize {
        self.groups.iter().map(GroupReport::warning_count).sum()
    }

    pub fn missing_groups(&self) -> usize {
        self.groups
            .iter()
            .filter(|g| g.status == GroupStatus::Missing)
            .count()
    }
}
