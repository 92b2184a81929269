use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StatusCategory
// ---------------------------------------------------------------------------

/// Normalized testing state of a tool, derived from free-form status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Verified,
    Partial,
    Issue,
    Untested,
}

impl StatusCategory {
    pub fn all() -> &'static [StatusCategory] {
        &[
            StatusCategory::Verified,
            StatusCategory::Partial,
            StatusCategory::Issue,
            StatusCategory::Untested,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusCategory::Verified => "verified",
            StatusCategory::Partial => "partial",
            StatusCategory::Issue => "issue",
            StatusCategory::Untested => "untested",
        }
    }

    /// Display icon used by the status documents themselves.
    pub fn icon(self) -> &'static str {
        match self {
            StatusCategory::Verified => "✅",
            StatusCategory::Partial => "🟡",
            StatusCategory::Issue => "❌",
            StatusCategory::Untested => "⚪",
        }
    }

    /// Classify free-form status text by its marker substrings.
    ///
    /// The marker table lives here and nowhere else; parsers call this rather
    /// than matching markers inline. Checks run in priority order: a verified
    /// marker wins over a partial marker, which wins over an issue marker.
    /// Returns `None` when no marker is present so callers can distinguish
    /// "no category stated" from an explicit `Untested`.
    pub fn classify(text: &str) -> Option<StatusCategory> {
        if text.contains('✅') || text.contains("Verified") {
            Some(StatusCategory::Verified)
        } else if text.contains('🟡') || text.contains("Complete") {
            Some(StatusCategory::Partial)
        } else if text.contains('❌') || text.contains("CRITICAL") {
            Some(StatusCategory::Issue)
        } else {
            None
        }
    }

    /// Classify status text, defaulting to `Untested` when no marker matches.
    pub fn classify_or_untested(text: &str) -> StatusCategory {
        Self::classify(text).unwrap_or(StatusCategory::Untested)
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatusCategory {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verified" => Ok(StatusCategory::Verified),
            "partial" => Ok(StatusCategory::Partial),
            "issue" => Ok(StatusCategory::Issue),
            "untested" => Ok(StatusCategory::Untested),
            _ => Err(crate::error::BoardError::InvalidCategory(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
