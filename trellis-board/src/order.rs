//! Per-group explicit ordering of entity ids.
//!
//! The index remembers the order a user has arranged each column in,
//! independent of any server-side order. It is never persisted; same-group
//! order lives only for the lifetime of the page.
//!
//! Reconciliation is lazy about forgetting: an id that
//! disappears from a group stays in the stored list (invisible, filtered by
//! the projector) so that a transient refetch gap does not lose its slot.
//! `gc` is the explicit pass that bounds that retention; the store runs it
//! on every refresh.

use crate::types::{EntityId, GroupId};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Mapping from group id to the ordered entity ids in that group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderIndex {
    groups: IndexMap<GroupId, Vec<EntityId>>,
}

impl OrderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a group's current membership into the recorded order and
    /// return the projected order for rendering.
    ///
    /// Recorded ids keep their positions (including ids currently absent,
    /// which are retained in storage but excluded from the returned
    /// projection); ids never seen before are appended in incoming order.
    pub fn reconcile(&mut self, group: &GroupId, current: &[EntityId]) -> Vec<EntityId> {
        let list = self.groups.entry(group.clone()).or_default();

        let known: HashSet<&EntityId> = list.iter().collect();
        let fresh: Vec<EntityId> = current
            .iter()
            .filter(|id| !known.contains(id))
            .cloned()
            .collect();
        list.extend(fresh);

        let live: HashSet<&EntityId> = current.iter().collect();
        list.iter().filter(|id| live.contains(id)).cloned().collect()
    }

    /// Move an entity to a new position within one group's list.
    ///
    /// `to` uses post-removal semantics: the entity is removed first, then
    /// reinserted at `to` (clamped to the list length). Unknown group or
    /// entity is a no-op; `from` is a hint that is re-derived from the id
    /// when it is stale.
    pub fn move_within_group(&mut self, group: &GroupId, entity: &EntityId, from: usize, to: usize) {
        let Some(list) = self.groups.get_mut(group) else {
            tracing::warn!(%group, "move within unknown group ignored");
            return;
        };
        let from = if list.get(from) == Some(entity) {
            from
        } else {
            match list.iter().position(|id| id == entity) {
                Some(i) => i,
                None => {
                    tracing::warn!(%group, %entity, "move of unknown entity ignored");
                    return;
                }
            }
        };
        let id = list.remove(from);
        let to = to.min(list.len());
        list.insert(to, id);
    }

    /// Move an entity from one group's list into another, inserting at
    /// `dest_index` (clamped). Creates the destination list if absent.
    /// Unknown source group or entity is a no-op.
    pub fn move_across_groups(
        &mut self,
        source: &GroupId,
        dest: &GroupId,
        entity: &EntityId,
        dest_index: usize,
    ) {
        let Some(list) = self.groups.get_mut(source) else {
            tracing::warn!(%source, "move from unknown group ignored");
            return;
        };
        let Some(pos) = list.iter().position(|id| id == entity) else {
            tracing::warn!(%source, %entity, "move of unknown entity ignored");
            return;
        };
        let id = list.remove(pos);

        let dest_list = self.groups.entry(dest.clone()).or_default();
        let index = dest_index.min(dest_list.len());
        dest_list.insert(index, id);
    }

    /// Drop every id not in `live` and remove lists emptied by that.
    pub fn gc(&mut self, live: &HashSet<EntityId>) {
        for list in self.groups.values_mut() {
            list.retain(|id| live.contains(id));
        }
        self.groups.retain(|_, list| !list.is_empty());
    }

    /// Forget everything. Used when the grouping mode changes and the index
    /// re-initializes from scratch on the next projection.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Recorded position of an entity within a group, if present.
    pub fn position_of(&self, group: &GroupId, entity: &EntityId) -> Option<usize> {
        self.groups.get(group)?.iter().position(|id| id == entity)
    }

    /// Deep copy for the rollback protocol.
    pub fn snapshot(&self) -> OrderIndex {
        self.clone()
    }

    /// Restore a previously taken snapshot wholesale.
    pub fn restore(&mut self, snapshot: OrderIndex) {
        *self = snapshot;
    }
}
