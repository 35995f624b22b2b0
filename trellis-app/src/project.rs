//! The project model as the remote API serves it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use trellis_board::{EntityId, GroupItem, MemberId, Priority};

/// A project row from `GET /api/projects`.
///
/// Field names are camelCase on the wire. Grouping-relevant fields are kept
/// raw; validation happens at classification time so one bad record never
/// fails a whole fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    #[serde(default)]
    pub assignee_ids: Vec<MemberId>,
    #[serde(default)]
    pub priority: Option<String>,
    /// Server sends a full timestamp; bucket math uses the date only.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl GroupItem for Project {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserializes_camel_case() {
        let json = r#"{
            "id": "p1",
            "name": "Website relaunch",
            "status": "in_progress",
            "assigneeIds": ["alice", "bob"],
            "priority": "high",
            "dueDate": "2024-06-30T18:30:00Z"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "Website relaunch");
        assert_eq!(project.assignee_ids.len(), 2);
        assert_eq!(project.priority(), Some(Priority::High));
        // Time of day is dropped at the grouping seam
        assert_eq!(
            GroupItem::due_date(&project),
            NaiveDate::from_ymd_opt(2024, 6, 30)
        );
    }

    #[test]
    fn test_project_optional_fields_default() {
        let json = r#"{"id": "p2", "name": "Bare", "status": "todo"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.assignee_ids.is_empty());
        assert_eq!(project.priority(), None);
        assert_eq!(GroupItem::due_date(&project), None);
    }

    #[test]
    fn test_unknown_priority_is_unclassified() {
        let json = r#"{"id": "p3", "name": "Odd", "status": "todo", "priority": "urgent"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.priority(), None);
    }

    #[test]
    fn test_set_status() {
        let json = r#"{"id": "p4", "name": "Move me", "status": "todo"}"#;
        let mut project: Project = serde_json::from_str(json).unwrap();
        project.set_status("done");
        assert_eq!(project.status, "done");
    }
}
