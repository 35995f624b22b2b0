//! The persistence seam.
//!
//! A cross-group move under a persistent grouping mode writes the entity's
//! new group value through this trait. The engine never constructs HTTP
//! requests itself; the host supplies an implementation (see the app
//! crate's API client). Writes are not cancellable: once issued, their
//! resolution always runs and the store confirms or rolls back.

use crate::error::Result;
use crate::types::{EntityId, GroupId};
use async_trait::async_trait;

/// Writes one entity's group-bearing field to the backend.
#[async_trait]
pub trait GroupFieldWriter: Send + Sync {
    /// Persist `value` as the entity's new group field (e.g. status).
    /// Any error return triggers a full rollback in the store.
    async fn update_group_field(&self, entity: &EntityId, value: &GroupId) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingWriter {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl GroupFieldWriter for CountingWriter {
        async fn update_group_field(&self, entity: &EntityId, _value: &GroupId) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(BoardError::rejected(entity.as_str(), 500))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_writer_trait_object_dispatch() {
        let writer = CountingWriter {
            calls: AtomicUsize::new(0),
            fail: false,
        };
        let as_dyn: &dyn GroupFieldWriter = &writer;
        as_dyn
            .update_group_field(&EntityId::from_string("p1"), &GroupId::from_string("done"))
            .await
            .unwrap();
        assert_eq!(writer.calls.load(Ordering::SeqCst), 1);
    }
}
