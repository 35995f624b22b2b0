//! Grouping strategies: how a flat entity list partitions into columns.
//!
//! `GroupBy` is a closed enum with one resolver per variant. Resolution is
//! pure: `(mode, entity, context) -> group ids`. Assignee mode fans out (an
//! entity with N assignees lands in N columns); every other mode partitions.
//! Entities whose relevant field falls outside the known domain resolve to
//! no group at all and are simply absent from the board.

mod due;

pub use due::DueBucket;

use crate::types::{GroupContext, GroupId, GroupItem, GroupMeta, Priority};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The selectable grouping criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupBy {
    Status,
    Assignee,
    Priority,
    DueDate,
}

impl GroupBy {
    /// All grouping modes, in the order the mode picker shows them.
    pub const ALL: [GroupBy; 4] = [
        GroupBy::Status,
        GroupBy::Assignee,
        GroupBy::Priority,
        GroupBy::DueDate,
    ];

    /// Returns the wire representation (matches the remote API's
    /// `groupBy` query values).
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Status => "status",
            GroupBy::Assignee => "assignee",
            GroupBy::Priority => "priority",
            GroupBy::DueDate => "dueDate",
        }
    }

    /// Whether a cross-group move under this mode changes a persisted
    /// field. Only status does: moving a card to another status column
    /// writes the new status through the persistence seam. Every other
    /// mode treats cross-group moves as a local, ephemeral reclassification
    /// that the next refetch may undo.
    pub fn is_persistent(&self) -> bool {
        matches!(self, GroupBy::Status)
    }

    /// Resolve the group ids an entity classifies into under this mode.
    ///
    /// Empty means unclassifiable (unknown status value, priority outside
    /// the domain, or no due date) and the entity is omitted from the
    /// board; assignee mode returns one id per matching assignee.
    pub fn resolve<E: GroupItem>(&self, entity: &E, ctx: &GroupContext<'_>) -> Vec<GroupId> {
        match self {
            GroupBy::Status => resolve_status(entity, ctx),
            GroupBy::Assignee => resolve_assignee(entity, ctx),
            GroupBy::Priority => resolve_priority(entity),
            GroupBy::DueDate => resolve_due_date(entity, ctx),
        }
    }

    /// The candidate columns for this mode, in display order. Membership is
    /// not considered here; the projector drops the unassigned column when
    /// nothing classifies into it.
    pub fn columns(&self, ctx: &GroupContext<'_>) -> Vec<GroupMeta> {
        match self {
            GroupBy::Status => ctx
                .statuses
                .iter()
                .map(|s| GroupMeta::new(s.id.clone(), s.title.clone()))
                .collect(),
            GroupBy::Assignee => {
                let mut metas: Vec<GroupMeta> = ctx
                    .members
                    .iter()
                    .map(|m| {
                        GroupMeta::new(GroupId::from(&m.id), m.name.clone())
                            .with_avatar_url(m.avatar_url.clone())
                    })
                    .collect();
                metas.push(GroupMeta::new(GroupId::unassigned(), "Unassigned"));
                metas
            }
            GroupBy::Priority => Priority::ALL
                .iter()
                .map(|p| GroupMeta::new(GroupId::from_string(p.as_str()), p.title()))
                .collect(),
            GroupBy::DueDate => DueBucket::ALL
                .iter()
                .map(|b| GroupMeta::new(GroupId::from_string(b.as_str()), b.title()))
                .collect(),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn resolve_status<E: GroupItem>(entity: &E, ctx: &GroupContext<'_>) -> Vec<GroupId> {
    let status = entity.status();
    if ctx.is_valid_status(status) {
        vec![GroupId::from_string(status)]
    } else {
        tracing::debug!(entity = %entity.id(), status, "unknown status, entity unclassified");
        Vec::new()
    }
}

fn resolve_assignee<E: GroupItem>(entity: &E, ctx: &GroupContext<'_>) -> Vec<GroupId> {
    let assigned: Vec<GroupId> = entity
        .assignees()
        .iter()
        .filter(|id| ctx.find_member(id).is_some())
        .map(GroupId::from)
        .collect();
    if assigned.is_empty() {
        vec![GroupId::unassigned()]
    } else {
        assigned
    }
}

fn resolve_priority<E: GroupItem>(entity: &E) -> Vec<GroupId> {
    match entity.priority() {
        Some(p) => vec![GroupId::from_string(p.as_str())],
        None => Vec::new(),
    }
}

fn resolve_due_date<E: GroupItem>(entity: &E, ctx: &GroupContext<'_>) -> Vec<GroupId> {
    match entity.due_date() {
        Some(due) => {
            let bucket = DueBucket::classify(due, ctx.today);
            vec![GroupId::from_string(bucket.as_str())]
        }
        None => Vec::new(),
    }
}
