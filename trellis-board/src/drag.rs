//! Drag gesture state machine.
//!
//! Turns low-level pointer events into a resolved [`Gesture`]: a click, a
//! move request, or nothing. The coordinator never mutates the order index
//! itself; mutation is deferred to drop and applied by the store, so the
//! board does not thrash mid-gesture.
//!
//! Hit testing is behind the [`HitTest`] trait so other input sources
//! (keyboard drag, touch) can plug in their own target resolution.

use crate::types::{EntityId, GroupId};

/// Pointer distance (logical px) the gesture must travel before it becomes
/// a drag. Below this, release is a click and goes to open-detail.
pub const ACTIVATION_DISTANCE: f64 = 5.0;

/// A pointer location in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// What the pointer is currently over.
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    /// Over a rendered card; a drop inserts before that card.
    Card {
        entity: EntityId,
        group: GroupId,
        index: usize,
    },
    /// Over an empty column's drop zone; a drop inserts at the top.
    EmptyColumn { group: GroupId },
}

impl DropTarget {
    fn group(&self) -> &GroupId {
        match self {
            DropTarget::Card { group, .. } => group,
            DropTarget::EmptyColumn { group } => group,
        }
    }

    fn index(&self) -> usize {
        match self {
            DropTarget::Card { index, .. } => *index,
            DropTarget::EmptyColumn { .. } => 0,
        }
    }
}

/// Resolves a pointer location to a drop target against the rendered
/// cards and empty-column zones.
pub trait HitTest {
    fn hit(&self, point: Point) -> Option<DropTarget>;
}

/// Ephemeral state for one active drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub entity: EntityId,
    pub source_group: GroupId,
    pub source_index: usize,
    /// Latest hit-test result; drives the insertion indicator.
    pub over: Option<DropTarget>,
}

/// A fully resolved reorder request, ready for the store to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    pub entity: EntityId,
    pub source_group: GroupId,
    pub source_index: usize,
    pub dest_group: GroupId,
    pub dest_index: usize,
}

impl MoveRequest {
    pub fn is_cross_group(&self) -> bool {
        self.source_group != self.dest_group
    }
}

/// The outcome of a completed gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Nothing to do (no target, dropped in place, or cancelled).
    None,
    /// Released below the activation threshold: open the entity detail.
    Click(EntityId),
    /// A reorder to apply.
    Move(MoveRequest),
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    /// Pressed but not yet past the activation threshold.
    Pending {
        entity: EntityId,
        group: GroupId,
        index: usize,
        origin: Point,
    },
    Dragging(DragSession),
}

/// The interactive state machine: `Idle -> Pending -> Dragging -> Idle`.
///
/// Events are handled synchronously and never block; the coordinator holds
/// no reference to the store or the network.
#[derive(Debug)]
pub struct DragCoordinator {
    phase: Phase,
    threshold: f64,
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            threshold: ACTIVATION_DISTANCE,
        }
    }

    /// Override the activation threshold (e.g. for coarse pointers).
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Arm a gesture on the card at (`group`, `index`).
    pub fn pointer_down(&mut self, entity: EntityId, group: GroupId, index: usize, point: Point) {
        self.phase = Phase::Pending {
            entity,
            group,
            index,
            origin: point,
        };
    }

    /// Track pointer movement. Past the threshold the gesture becomes a
    /// drag; while dragging, the drop target is re-resolved on every move.
    pub fn pointer_move(&mut self, point: Point, hit: &dyn HitTest) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => {}
            Phase::Pending {
                entity,
                group,
                index,
                origin,
            } => {
                if origin.distance_to(point) >= self.threshold {
                    tracing::debug!(entity = %entity, "drag activated");
                    self.phase = Phase::Dragging(DragSession {
                        entity,
                        source_group: group,
                        source_index: index,
                        over: hit.hit(point),
                    });
                } else {
                    self.phase = Phase::Pending {
                        entity,
                        group,
                        index,
                        origin,
                    };
                }
            }
            Phase::Dragging(mut session) => {
                session.over = hit.hit(point);
                self.phase = Phase::Dragging(session);
            }
        }
    }

    /// Release the pointer and resolve the gesture.
    pub fn pointer_up(&mut self) -> Gesture {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Idle => Gesture::None,
            Phase::Pending { entity, .. } => Gesture::Click(entity),
            Phase::Dragging(session) => resolve_drop(session),
        }
    }

    /// Abort the gesture (escape key, pointer left every drop surface)
    /// with no observable side effect.
    pub fn cancel(&mut self) {
        if !matches!(self.phase, Phase::Idle) {
            tracing::debug!("drag cancelled");
        }
        self.phase = Phase::Idle;
    }

    /// The active session, if a drag is in progress (for rendering the
    /// ghost card and insertion indicator).
    pub fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            Phase::Dragging(session) => Some(session),
            _ => None,
        }
    }
}

/// Resolve a drop against the session's last target.
///
/// Within one group, a target index past the source is decremented by one:
/// the source card is removed before reinsertion, shifting later indices
/// left. Dropping back onto the original slot is a no-op.
fn resolve_drop(session: DragSession) -> Gesture {
    let Some(target) = session.over else {
        return Gesture::None;
    };

    let dest_group = target.group().clone();
    let mut dest_index = target.index();

    if dest_group == session.source_group {
        if dest_index > session.source_index {
            dest_index -= 1;
        }
        if dest_index == session.source_index {
            return Gesture::None;
        }
    }

    Gesture::Move(MoveRequest {
        entity: session.entity,
        source_group: session.source_group,
        source_index: session.source_index,
        dest_group,
        dest_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHit(Option<DropTarget>);

    impl HitTest for FixedHit {
        fn hit(&self, _point: Point) -> Option<DropTarget> {
            self.0.clone()
        }
    }

    fn eid(s: &str) -> EntityId {
        EntityId::from_string(s)
    }

    fn gid(s: &str) -> GroupId {
        GroupId::from_string(s)
    }

    fn card_target(entity: &str, group: &str, index: usize) -> DropTarget {
        DropTarget::Card {
            entity: eid(entity),
            group: gid(group),
            index,
        }
    }

    fn start_drag(coordinator: &mut DragCoordinator, target: Option<DropTarget>) {
        coordinator.pointer_down(eid("a"), gid("todo"), 0, Point::new(0.0, 0.0));
        coordinator.pointer_move(Point::new(20.0, 0.0), &FixedHit(target));
    }

    #[test]
    fn test_release_below_threshold_is_a_click() {
        let mut coordinator = DragCoordinator::new();
        coordinator.pointer_down(eid("a"), gid("todo"), 0, Point::new(0.0, 0.0));
        coordinator.pointer_move(Point::new(2.0, 2.0), &FixedHit(None));

        assert_eq!(coordinator.pointer_up(), Gesture::Click(eid("a")));
    }

    #[test]
    fn test_threshold_crossing_activates_drag() {
        let mut coordinator = DragCoordinator::new();
        coordinator.pointer_down(eid("a"), gid("todo"), 0, Point::new(0.0, 0.0));
        assert!(coordinator.session().is_none());

        coordinator.pointer_move(Point::new(6.0, 0.0), &FixedHit(None));
        let session = coordinator.session().unwrap();
        assert_eq!(session.entity, eid("a"));
        assert_eq!(session.source_index, 0);
    }

    #[test]
    fn test_drop_with_no_target_does_nothing() {
        let mut coordinator = DragCoordinator::new();
        start_drag(&mut coordinator, None);
        assert_eq!(coordinator.pointer_up(), Gesture::None);
    }

    #[test]
    fn test_drop_later_in_same_group_applies_tie_break() {
        let mut coordinator = DragCoordinator::new();
        // Dragging "a" (index 0); released over index 2 in the same column
        start_drag(&mut coordinator, Some(card_target("c", "todo", 2)));

        match coordinator.pointer_up() {
            Gesture::Move(mv) => {
                assert!(!mv.is_cross_group());
                // Target index decremented to compensate for removal
                assert_eq!(mv.dest_index, 1);
            }
            other => panic!("expected move, got {:?}", other),
        }
    }

    #[test]
    fn test_drop_earlier_in_same_group_keeps_index() {
        let mut coordinator = DragCoordinator::new();
        coordinator.pointer_down(eid("c"), gid("todo"), 2, Point::new(0.0, 0.0));
        coordinator.pointer_move(
            Point::new(0.0, -30.0),
            &FixedHit(Some(card_target("a", "todo", 0))),
        );

        match coordinator.pointer_up() {
            Gesture::Move(mv) => assert_eq!(mv.dest_index, 0),
            other => panic!("expected move, got {:?}", other),
        }
    }

    #[test]
    fn test_drop_on_own_slot_is_noop() {
        let mut coordinator = DragCoordinator::new();
        start_drag(&mut coordinator, Some(card_target("a", "todo", 0)));
        assert_eq!(coordinator.pointer_up(), Gesture::None);

        // Dropping just after itself collapses to the same slot
        let mut coordinator = DragCoordinator::new();
        start_drag(&mut coordinator, Some(card_target("b", "todo", 1)));
        assert_eq!(coordinator.pointer_up(), Gesture::None);
    }

    #[test]
    fn test_drop_across_groups_keeps_dest_index() {
        let mut coordinator = DragCoordinator::new();
        start_drag(&mut coordinator, Some(card_target("x", "done", 1)));

        match coordinator.pointer_up() {
            Gesture::Move(mv) => {
                assert!(mv.is_cross_group());
                assert_eq!(mv.dest_group, gid("done"));
                assert_eq!(mv.dest_index, 1);
            }
            other => panic!("expected move, got {:?}", other),
        }
    }

    #[test]
    fn test_drop_on_empty_column_inserts_at_top() {
        let mut coordinator = DragCoordinator::new();
        start_drag(
            &mut coordinator,
            Some(DropTarget::EmptyColumn { group: gid("done") }),
        );

        match coordinator.pointer_up() {
            Gesture::Move(mv) => {
                assert_eq!(mv.dest_group, gid("done"));
                assert_eq!(mv.dest_index, 0);
            }
            other => panic!("expected move, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_discards_session() {
        let mut coordinator = DragCoordinator::new();
        start_drag(&mut coordinator, Some(card_target("x", "done", 0)));
        coordinator.cancel();

        assert!(coordinator.session().is_none());
        assert_eq!(coordinator.pointer_up(), Gesture::None);
    }

    #[test]
    fn test_moving_target_updates_session() {
        let mut coordinator = DragCoordinator::new();
        start_drag(&mut coordinator, Some(card_target("x", "done", 0)));
        coordinator.pointer_move(
            Point::new(40.0, 0.0),
            &FixedHit(Some(card_target("y", "done", 3))),
        );

        let over = coordinator.session().unwrap().over.clone();
        assert_eq!(over, Some(card_target("y", "done", 3)));
    }
}
