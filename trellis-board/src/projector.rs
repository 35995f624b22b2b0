//! Projection: entity list + grouping mode -> ordered columns.

use crate::grouping::GroupBy;
use crate::order::OrderIndex;
use crate::types::{EntityId, GroupColumn, GroupContext, GroupId, GroupItem};
use std::collections::HashMap;

/// Classify every entity, reconcile each column's membership into the order
/// index, and return the columns ready to render.
///
/// Unclassifiable entities (unknown status, out-of-domain priority, no due
/// date) are omitted silently. The reserved unassigned column is dropped
/// when nothing classifies into it.
pub fn project<E: GroupItem>(
    entities: &[E],
    group_by: GroupBy,
    ctx: &GroupContext<'_>,
    order: &mut OrderIndex,
) -> Vec<GroupColumn<E>> {
    let by_id: HashMap<&EntityId, &E> = entities.iter().map(|e| (e.id(), e)).collect();

    let mut membership: HashMap<GroupId, Vec<EntityId>> = HashMap::new();
    for entity in entities {
        for group in group_by.resolve(entity, ctx) {
            membership.entry(group).or_default().push(entity.id().clone());
        }
    }

    let mut columns = Vec::new();
    for meta in group_by.columns(ctx) {
        let current = membership.remove(&meta.id).unwrap_or_default();
        if meta.id.is_unassigned() && current.is_empty() {
            continue;
        }
        let ordered = order.reconcile(&meta.id, &current);
        let items = ordered
            .iter()
            .filter_map(|id| by_id.get(id).map(|e| (*e).clone()))
            .collect();
        columns.push(GroupColumn { meta, items });
    }
    columns
}
