//! Group-level types: the derived columns and the directories they are
//! derived from.
//!
//! Groups are never stored. They are recomputed from the grouping mode plus
//! the status/member directories every time the board projects.

use super::ids::{GroupId, MemberId};
use crate::auto_color;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One value of the workflow status enum, in board order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDef {
    pub id: GroupId,
    pub title: String,
}

impl StatusDef {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: GroupId::from_string(id),
            title: title.into(),
        }
    }
}

/// A team member, used by assignee grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: MemberId::from_string(id),
            name: name.into(),
            avatar_url: None,
        }
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

/// Header metadata for one rendered column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMeta {
    pub id: GroupId,
    pub title: String,
    /// Avatar for assignee columns; `None` elsewhere and for unassigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Deterministic accent color (6-char hex without `#`).
    pub color: String,
}

impl GroupMeta {
    pub fn new(id: GroupId, title: impl Into<String>) -> Self {
        let color = auto_color::auto_color(id.as_str()).to_string();
        Self {
            id,
            title: title.into(),
            avatar_url: None,
            color,
        }
    }

    pub fn with_avatar_url(mut self, url: Option<String>) -> Self {
        self.avatar_url = url;
        self
    }
}

/// A projected column: header metadata plus the ordered entities in it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupColumn<E> {
    pub meta: GroupMeta,
    pub items: Vec<E>,
}

impl<E> GroupColumn<E> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Everything the resolver needs besides the entity itself: the status and
/// member directories, and "now" at whole-day granularity.
#[derive(Debug, Clone, Copy)]
pub struct GroupContext<'a> {
    pub statuses: &'a [StatusDef],
    pub members: &'a [Member],
    pub today: NaiveDate,
}

impl<'a> GroupContext<'a> {
    pub fn new(statuses: &'a [StatusDef], members: &'a [Member], today: NaiveDate) -> Self {
        Self {
            statuses,
            members,
            today,
        }
    }

    /// Whether `status` is one of the board's valid statuses.
    pub fn is_valid_status(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s.id.as_str() == status)
    }

    pub fn find_member(&self, id: &MemberId) -> Option<&'a Member> {
        self.members.iter().find(|m| &m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_statuses;

    #[test]
    fn test_context_status_lookup() {
        let statuses = default_statuses();
        let ctx = GroupContext::new(&statuses, &[], NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(ctx.is_valid_status("todo"));
        assert!(ctx.is_valid_status("done"));
        assert!(!ctx.is_valid_status("archived"));
    }

    #[test]
    fn test_group_meta_color_is_deterministic() {
        let a = GroupMeta::new(GroupId::from_string("todo"), "To Do");
        let b = GroupMeta::new(GroupId::from_string("todo"), "To Do");
        assert_eq!(a.color, b.color);
        assert_eq!(a.color.len(), 6);
    }
}
