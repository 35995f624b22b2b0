//! The task model as the remote API serves it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use trellis_board::{EntityId, GroupItem, MemberId, Priority};

/// A task row from `GET /api/tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    /// Owning project, when the task board is filtered to one project.
    #[serde(default)]
    pub project_id: Option<EntityId>,
    #[serde(default)]
    pub assignee_ids: Vec<MemberId>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl GroupItem for Task {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn assignees(&self) -> &[MemberId] {
        &self.assignee_ids
    }

    fn priority(&self) -> Option<Priority> {
        self.priority.as_deref().and_then(Priority::parse)
    }

    fn due_date(&self) -> Option<NaiveDate> {
        self.due_date.map(|d| d.date_naive())
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}
