use crate::types::StatusCategory;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ToolStatusRecord
// ---------------------------------------------------------------------------

/// One tool's aggregated status. At most one record exists per tool name.
///
/// `status_category` is `None` when no source ever stated a category for this
/// tool; consumers resolve that through [`ToolStatusRecord::category`], which
/// defaults to `Untested`. Keeping the distinction matters for the shallow
/// merge: a source that never classified a tool must not erase a category
/// stated by an earlier source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolStatusRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_category: Option<StatusCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub working_components: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub current_issues: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

impl ToolStatusRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Resolved category; absent defaults to `Untested`, never a crash.
    pub fn category(&self) -> StatusCategory {
        self.status_category.unwrap_or(StatusCategory::Untested)
    }

    pub fn status_display(&self) -> &str {
        self.status_text
            .as_deref()
            .or(self.detailed_status.as_deref())
            .unwrap_or("Not Tested")
    }

    pub fn issues_display(&self) -> &str {
        self.issues.as_deref().unwrap_or("-")
    }

    pub fn priority_display(&self) -> &str {
        self.priority.as_deref().unwrap_or("-")
    }

    /// Shallow field merge: fields present on `other` overwrite, fields absent
    /// on `other` are left alone. Sequence fields count as present when
    /// non-empty. The record name is the merge key and never changes.
    pub fn merge_from(&mut self, other: ToolStatusRecord) {
        if other.status_text.is_some() {
            self.status_text = other.status_text;
        }
        if other.status_category.is_some() {
            self.status_category = other.status_category;
        }
        if other.issues.is_some() {
            self.issues = other.issues;
        }
        if other.priority.is_some() {
            self.priority = other.priority;
        }
        if other.detailed_status.is_some() {
            self.detailed_status = other.detailed_status;
        }
        if other.technical_details.is_some() {
            self.technical_details = other.technical_details;
        }
        if !other.working_components.is_empty() {
            self.working_components = other.working_components;
        }
        if !other.current_issues.is_empty() {
            self.current_issues = other.current_issues;
        }
        if !other.next_steps.is_empty() {
            self.next_steps = other.next_steps;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
