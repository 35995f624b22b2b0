//! The seam between the engine and the host page's entity types.

use super::ids::{EntityId, MemberId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority bucket. The domain is closed; anything else the server sends is
/// unclassifiable and the entity is omitted from priority columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in display order (high first).
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Returns the string representation used as a group id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Display title for the column header.
    pub fn title(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse a raw priority value, returning `None` for anything outside
    /// the closed domain.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item the board can group, order, and drag.
///
/// Host pages (the project board and the task board) implement this for
/// their own API models. The engine reads the grouping-relevant fields and
/// mutates exactly one thing: the status field, when a persisted
/// cross-group move lands.
pub trait GroupItem: Clone + Send + Sync {
    /// Stable opaque id.
    fn id(&self) -> &EntityId;

    /// Short human label, used in notifications.
    fn label(&self) -> &str;

    /// Raw workflow status value. Validated against the context's status
    /// directory; unknown values leave the entity unclassified.
    fn status(&self) -> &str;

    /// Assigned members. Empty means unassigned.
    fn assignees(&self) -> &[MemberId];

    /// Priority, if the raw value falls in the closed domain.
    fn priority(&self) -> Option<Priority>;

    /// Due date at whole-day granularity, if any.
    fn due_date(&self) -> Option<NaiveDate>;

    /// Overwrite the status field. Called only when a cross-group move in
    /// status mode is applied optimistically (and again on rollback via
    /// snapshot restore).
    fn set_status(&mut self, status: &str);
}
