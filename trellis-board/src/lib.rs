//! Grouped, ordered, drag-reorderable board engine
//!
//! This crate backs the kanban boards of the dashboard (the project board
//! and the task board). It partitions a flat entity list into named columns
//! by a selectable criterion, keeps an explicit per-column ordering
//! independent of the entities' natural order, and turns drag gestures into
//! exactly-once mutations, optimistically persisted with full rollback when
//! a move crosses a status boundary.
//!
//! ## Overview
//!
//! - **Grouping is derived** - columns are recomputed from the mode and the
//!   status/member directories on every projection, never stored
//! - **Order is ephemeral** - per-column order lives in memory only;
//!   same-column order is never sent to the backend
//! - **Drop is the commit point** - nothing mutates mid-gesture; a drop
//!   resolves to one [`drag::MoveRequest`] applied atomically
//! - **Rollback is one call** - the store snapshots before an optimistic
//!   write and restores wholesale if the backend refuses
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use trellis_board::{BoardStore, GroupBy, GroupContext, defaults::default_statuses};
//! # use trellis_board::test_support::TestCard;
//!
//! let mut store: BoardStore<TestCard> = BoardStore::new(GroupBy::Status);
//! store.refresh(vec![/* entities fetched from the API */]);
//!
//! let statuses = default_statuses();
//! let today = chrono::Local::now().date_naive();
//! let ctx = GroupContext::new(&statuses, &[], today);
//!
//! for column in store.columns(&ctx) {
//!     println!("{}: {} cards", column.meta.title, column.len());
//! }
//! ```
//!
//! ## Data flow
//!
//! ```text
//! entity list + grouping mode
//!         │
//!         ▼
//! projector (grouping resolver + order index) ──► ordered columns
//!         ▲                                            │
//!         │                                            ▼
//! store mutation ◄── drag coordinator ◄── pointer events
//!         │
//!         ▼ (status mode, cross-group only)
//! persistence seam ──► confirm | roll back + notify
//! ```

pub mod auto_color;
pub mod defaults;
pub mod drag;
mod error;
pub mod grouping;
pub mod notify;
pub mod order;
pub mod persist;
pub mod projector;
pub mod store;
pub mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{BoardError, Result};
pub use grouping::{DueBucket, GroupBy};
pub use order::OrderIndex;
pub use store::{commit_move, Applied, BoardStore, PendingWrite, StoreSnapshot};

// Re-export commonly used types
pub use drag::{DragCoordinator, DropTarget, Gesture, HitTest, MoveRequest, Point};
pub use notify::{Notify, TracingNotify};
pub use persist::GroupFieldWriter;
pub use types::{
    EntityId, GroupColumn, GroupContext, GroupId, GroupItem, GroupMeta, Member, MemberId,
    Priority, StatusDef,
};
