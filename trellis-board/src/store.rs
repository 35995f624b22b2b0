//! The board store: entity list + order index + active grouping mode.
//!
//! The store is the single owner of everything a drop can mutate, so the
//! rollback protocol is one call instead of re-deriving prior state: take a
//! [`StoreSnapshot`] before an optimistic write, restore it wholesale if the
//! write fails. Partial patches are not offered; restoring only one of the
//! two structures would leave them mutually inconsistent.

use crate::drag::MoveRequest;
use crate::error::Result;
use crate::grouping::GroupBy;
use crate::notify::Notify;
use crate::order::OrderIndex;
use crate::persist::GroupFieldWriter;
use crate::projector::project;
use crate::types::{EntityId, GroupColumn, GroupContext, GroupId, GroupItem};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// Pre-move state captured for the rollback protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot<E> {
    entities: Vec<E>,
    order: OrderIndex,
}

/// An optimistic write awaiting its backend resolution.
///
/// Carries the pre-move snapshot; exactly one of [`BoardStore::confirm`] or
/// [`BoardStore::roll_back`] must consume it.
#[derive(Debug)]
pub struct PendingWrite<E> {
    pub entity: EntityId,
    pub label: String,
    pub group_value: GroupId,
    snapshot: StoreSnapshot<E>,
}

/// What applying a [`MoveRequest`] did.
#[derive(Debug)]
pub enum Applied<E> {
    /// Nothing changed (stale target raced a refresh).
    None,
    /// The move completed locally; no backend involvement.
    Local { cross_group: bool },
    /// The move was applied optimistically and must be resolved against
    /// the backend.
    Persist(PendingWrite<E>),
}

/// Owns the board state for one page (the project board or the task board).
pub struct BoardStore<E: GroupItem> {
    entities: Vec<E>,
    order: OrderIndex,
    group_by: GroupBy,
    /// In-flight write count per entity. A counter, not a flag: overlapping
    /// writes for one entity are allowed and each response applies its own
    /// outcome (last-write-wins, no server-side versioning assumed).
    updating: HashMap<EntityId, u32>,
    on_reorder: Option<Box<dyn Fn() + Send + Sync>>,
}

impl<E: GroupItem> BoardStore<E> {
    pub fn new(group_by: GroupBy) -> Self {
        Self {
            entities: Vec::new(),
            order: OrderIndex::new(),
            group_by,
            updating: HashMap::new(),
            on_reorder: None,
        }
    }

    /// Register the hook fired after every successful local mutation, so
    /// the host page can re-sort its own list representation.
    pub fn set_on_reorder(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.on_reorder = Some(Box::new(hook));
    }

    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }

    /// Switch the grouping mode. The order index restarts from scratch;
    /// per-group order is meaningless across criteria.
    pub fn set_group_by(&mut self, group_by: GroupBy) {
        if self.group_by != group_by {
            self.group_by = group_by;
            self.order.clear();
        }
    }

    /// Replace the entity list (fetch or filter change) and garbage-collect
    /// the order index against the new live set.
    pub fn refresh(&mut self, entities: Vec<E>) {
        self.entities = entities;
        let live: HashSet<EntityId> = self.entities.iter().map(|e| e.id().clone()).collect();
        self.order.gc(&live);
    }

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn entity(&self, id: &EntityId) -> Option<&E> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// True while a backend write for this entity is outstanding.
    pub fn is_updating(&self, id: &EntityId) -> bool {
        self.updating.contains_key(id)
    }

    /// Project the current state into ordered columns.
    pub fn columns(&mut self, ctx: &GroupContext<'_>) -> Vec<GroupColumn<E>> {
        project(&self.entities, self.group_by, ctx, &mut self.order)
    }

    /// Capture the rollback unit: entity list + order index.
    pub fn snapshot(&self) -> StoreSnapshot<E> {
        StoreSnapshot {
            entities: self.entities.clone(),
            order: self.order.snapshot(),
        }
    }

    /// Restore a snapshot wholesale. In-flight markers are not part of the
    /// snapshot; other outstanding writes stay marked.
    pub fn restore(&mut self, snapshot: StoreSnapshot<E>) {
        self.entities = snapshot.entities;
        self.order.restore(snapshot.order);
    }

    /// Apply a resolved drop synchronously.
    ///
    /// Within-group moves and cross-group moves under ephemeral modes
    /// mutate the order index only. A cross-group move under a persistent
    /// mode also rewrites the entity's status field optimistically and
    /// returns the pending write for the caller to resolve.
    pub fn apply(&mut self, request: MoveRequest) -> Applied<E> {
        if !request.is_cross_group() {
            self.order.move_within_group(
                &request.source_group,
                &request.entity,
                request.source_index,
                request.dest_index,
            );
            self.fire_reorder();
            return Applied::Local { cross_group: false };
        }

        if !self.group_by.is_persistent() {
            self.order.move_across_groups(
                &request.source_group,
                &request.dest_group,
                &request.entity,
                request.dest_index,
            );
            self.fire_reorder();
            return Applied::Local { cross_group: true };
        }

        let Some(pos) = self.entities.iter().position(|e| e.id() == &request.entity) else {
            tracing::warn!(entity = %request.entity, "drop target vanished before apply");
            return Applied::None;
        };

        let snapshot = self.snapshot();
        self.order.move_across_groups(
            &request.source_group,
            &request.dest_group,
            &request.entity,
            request.dest_index,
        );
        let entity = &mut self.entities[pos];
        entity.set_status(request.dest_group.as_str());
        let label = entity.label().to_string();

        *self.updating.entry(request.entity.clone()).or_insert(0) += 1;
        self.fire_reorder();

        Applied::Persist(PendingWrite {
            entity: request.entity,
            label,
            group_value: request.dest_group,
            snapshot,
        })
    }

    /// The backend accepted the write; nothing else changes.
    pub fn confirm(&mut self, pending: &PendingWrite<E>) {
        self.clear_updating(&pending.entity);
        tracing::debug!(entity = %pending.entity, group = %pending.group_value, "move persisted");
    }

    /// The backend refused the write: restore the pre-move snapshot in
    /// full (entity list and order index together).
    pub fn roll_back(&mut self, pending: PendingWrite<E>) {
        self.clear_updating(&pending.entity);
        tracing::warn!(entity = %pending.entity, group = %pending.group_value, "move rejected, rolling back");
        self.restore(pending.snapshot);
    }

    fn clear_updating(&mut self, id: &EntityId) {
        if let Some(count) = self.updating.get_mut(id) {
            *count -= 1;
            if *count == 0 {
                self.updating.remove(id);
            }
        }
    }

    fn fire_reorder(&self) {
        if let Some(hook) = &self.on_reorder {
            hook();
        }
    }
}

/// Drive a resolved move through the full protocol: apply optimistically,
/// await the backend where required, confirm or roll back, and surface the
/// outcome through the notification seam.
///
/// The store lock is released while the write is in flight, so further
/// gestures are never blocked behind the network.
pub async fn commit_move<E: GroupItem>(
    store: &RwLock<BoardStore<E>>,
    request: MoveRequest,
    writer: &dyn GroupFieldWriter,
    notify: &dyn Notify,
) -> Result<()> {
    let entity_id = request.entity.clone();
    let applied = store.write().await.apply(request);

    match applied {
        Applied::None => Ok(()),
        Applied::Local { cross_group } => {
            if cross_group {
                let guard = store.read().await;
                if let Some(entity) = guard.entity(&entity_id) {
                    notify.success(&format!("Moved \"{}\"", entity.label()));
                }
            }
            Ok(())
        }
        Applied::Persist(pending) => {
            let result = writer
                .update_group_field(&pending.entity, &pending.group_value)
                .await;
            let mut guard = store.write().await;
            match result {
                Ok(()) => {
                    notify.success(&format!(
                        "Moved \"{}\" to {}",
                        pending.label, pending.group_value
                    ));
                    guard.confirm(&pending);
                    Ok(())
                }
                Err(err) => {
                    notify.error(&format!("Could not move \"{}\": {}", pending.label, err));
                    guard.roll_back(pending);
                    Err(err)
                }
            }
        }
    }
}
