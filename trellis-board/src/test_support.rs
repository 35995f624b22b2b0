//! Test-only helpers shared by unit tests, integration tests, and
//! downstream crates' tests (behind the `test-support` feature).

use crate::types::{EntityId, GroupItem, MemberId, Priority};
use chrono::NaiveDate;

/// A minimal groupable entity for exercising the engine without either
/// host model.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCard {
    id: EntityId,
    label: String,
    status: String,
    assignees: Vec<MemberId>,
    priority: String,
    due: Option<NaiveDate>,
}

impl TestCard {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: EntityId::from_string(id),
            label: label.into(),
            status: String::new(),
            assignees: Vec::new(),
            priority: String::new(),
            due: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn assignee(mut self, member: impl Into<String>) -> Self {
        self.assignees.push(MemberId::from_string(member));
        self
    }

    /// Raw priority value, unvalidated so tests can exercise out-of-domain
    /// values.
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    pub fn status_raw(&self) -> &str {
        &self.status
    }

    pub fn priority_raw(&self) -> &str {
        &self.priority
    }
}

impl GroupItem for TestCard {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn assignees(&self) -> &[MemberId] {
        &self.assignees
    }

    fn priority(&self) -> Option<Priority> {
        Priority::parse(&self.priority)
    }

    fn due_date(&self) -> Option<NaiveDate> {
        self.due
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}
