//! One board's wiring: store + drag coordinator + persistence + toasts.
//!
//! The project board and the task board are the two instances of this
//! controller; they differ only in entity type and writer. Pointer events
//! are synchronous and never touch the network; only a drop that must
//! persist awaits, and the store lock is released for the duration of the
//! write so other gestures keep flowing.

use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use trellis_board::{
    commit_move, BoardStore, DragCoordinator, EntityId, Gesture, GroupBy, GroupColumn,
    GroupContext, GroupFieldWriter, GroupId, GroupItem, HitTest, Notify, Point,
};

pub struct BoardController<E: GroupItem> {
    store: RwLock<BoardStore<E>>,
    drag: Mutex<DragCoordinator>,
    writer: Arc<dyn GroupFieldWriter>,
    notify: Arc<dyn Notify>,
}

impl<E: GroupItem> BoardController<E> {
    pub fn new(
        group_by: GroupBy,
        writer: Arc<dyn GroupFieldWriter>,
        notify: Arc<dyn Notify>,
    ) -> Self {
        Self {
            store: RwLock::new(BoardStore::new(group_by)),
            drag: Mutex::new(DragCoordinator::new()),
            writer,
            notify,
        }
    }

    /// Register the hook fired after every successful local mutation.
    pub async fn set_on_reorder(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.store.write().await.set_on_reorder(hook);
    }

    /// Replace the board's entities after a fetch or filter change.
    pub async fn refresh(&self, entities: Vec<E>) {
        self.store.write().await.refresh(entities);
    }

    pub async fn group_by(&self) -> GroupBy {
        self.store.read().await.group_by()
    }

    pub async fn set_group_by(&self, group_by: GroupBy) {
        self.store.write().await.set_group_by(group_by);
    }

    /// Project the board into ordered columns for rendering.
    pub async fn columns(&self, ctx: &GroupContext<'_>) -> Vec<GroupColumn<E>> {
        self.store.write().await.columns(ctx)
    }

    /// True while a backend write for the entity is outstanding; the
    /// renderer dims the card.
    pub async fn is_updating(&self, id: &EntityId) -> bool {
        self.store.read().await.is_updating(id)
    }

    pub fn pointer_down(&self, entity: EntityId, group: GroupId, index: usize, point: Point) {
        self.drag.lock().unwrap().pointer_down(entity, group, index, point);
    }

    pub fn pointer_move(&self, point: Point, hit: &dyn HitTest) {
        self.drag.lock().unwrap().pointer_move(point, hit);
    }

    pub fn cancel_drag(&self) {
        self.drag.lock().unwrap().cancel();
    }

    /// Release the pointer. A click-not-drag returns the entity id so the
    /// page can open its detail view; a drop is applied (and persisted
    /// where the mode requires) before returning.
    pub async fn pointer_up(&self) -> Option<EntityId> {
        let gesture = self.drag.lock().unwrap().pointer_up();
        match gesture {
            Gesture::None => None,
            Gesture::Click(entity) => Some(entity),
            Gesture::Move(request) => {
                // Failures are already rolled back and surfaced as toasts
                if let Err(err) =
                    commit_move(&self.store, request, self.writer.as_ref(), self.notify.as_ref())
                        .await
                {
                    tracing::debug!(%err, "move did not persist");
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use trellis_board::defaults::default_statuses;
    use trellis_board::test_support::TestCard;
    use trellis_board::DropTarget;

    struct FixedHit(Option<DropTarget>);

    impl HitTest for FixedHit {
        fn hit(&self, _point: Point) -> Option<DropTarget> {
            self.0.clone()
        }
    }

    struct FlakyWriter {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl GroupFieldWriter for FlakyWriter {
        async fn update_group_field(
            &self,
            entity: &EntityId,
            _value: &GroupId,
        ) -> trellis_board::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(trellis_board::BoardError::rejected(entity.as_str(), 500))
            } else {
                Ok(())
            }
        }
    }

    struct NullNotify;

    impl Notify for NullNotify {
        fn success(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
    }

    fn controller(fail: bool) -> (BoardController<TestCard>, Arc<FlakyWriter>) {
        let writer = Arc::new(FlakyWriter {
            calls: AtomicUsize::new(0),
            fail,
        });
        let controller =
            BoardController::new(GroupBy::Status, writer.clone(), Arc::new(NullNotify));
        (controller, writer)
    }

    async fn column(controller: &BoardController<TestCard>, group: &str) -> Vec<String> {
        let statuses = default_statuses();
        let ctx = GroupContext::new(&statuses, &[], NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        controller
            .columns(&ctx)
            .await
            .into_iter()
            .find(|c| c.meta.id.as_str() == group)
            .map(|c| c.items.iter().map(|e| e.id().as_str().to_string()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_click_returns_entity_for_detail_view() {
        let (controller, writer) = controller(false);
        controller
            .refresh(vec![TestCard::new("e1", "Card").status("todo")])
            .await;
        column(&controller, "todo").await;

        controller.pointer_down(
            EntityId::from_string("e1"),
            GroupId::from_string("todo"),
            0,
            Point::new(0.0, 0.0),
        );
        controller.pointer_move(Point::new(1.0, 0.0), &FixedHit(None));

        assert_eq!(
            controller.pointer_up().await,
            Some(EntityId::from_string("e1"))
        );
        assert_eq!(writer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_drop_across_status_columns_persists() {
        let (controller, writer) = controller(false);
        controller
            .refresh(vec![
                TestCard::new("e1", "Card").status("todo"),
                TestCard::new("e2", "Other").status("done"),
            ])
            .await;
        column(&controller, "todo").await;

        controller.pointer_down(
            EntityId::from_string("e1"),
            GroupId::from_string("todo"),
            0,
            Point::new(0.0, 0.0),
        );
        controller.pointer_move(
            Point::new(40.0, 0.0),
            &FixedHit(Some(DropTarget::Card {
                entity: EntityId::from_string("e2"),
                group: GroupId::from_string("done"),
                index: 0,
            })),
        );

        assert_eq!(controller.pointer_up().await, None);
        assert_eq!(writer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(column(&controller, "done").await, vec!["e1", "e2"]);
    }

    #[tokio::test]
    async fn test_failed_drop_reverts() {
        let (controller, writer) = controller(true);
        controller
            .refresh(vec![
                TestCard::new("e1", "Card").status("todo"),
                TestCard::new("e2", "Other").status("done"),
            ])
            .await;
        column(&controller, "todo").await;

        controller.pointer_down(
            EntityId::from_string("e1"),
            GroupId::from_string("todo"),
            0,
            Point::new(0.0, 0.0),
        );
        controller.pointer_move(
            Point::new(40.0, 0.0),
            &FixedHit(Some(DropTarget::EmptyColumn {
                group: GroupId::from_string("review"),
            })),
        );
        controller.pointer_up().await;

        assert_eq!(writer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(column(&controller, "todo").await, vec!["e1"]);
        assert_eq!(column(&controller, "review").await, Vec::<String>::new());
        assert!(!controller.is_updating(&EntityId::from_string("e1")).await);
    }
}
