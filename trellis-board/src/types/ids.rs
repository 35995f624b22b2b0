//! Opaque identifier newtypes.
//!
//! Ids are stable strings owned by the remote API. `new()` mints a ULID for
//! entities created locally (mostly in tests); everything else round-trips
//! whatever the server sent.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh ULID-backed id.
            pub fn new() -> Self {
                Self(ulid::Ulid::new().to_string())
            }

            /// Wrap an existing id string.
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The raw id string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

id_type! {
    /// Identifier of an entity being organized (a project or a task).
    EntityId
}

id_type! {
    /// Identifier of a rendered group (column). Derived from the active
    /// grouping criterion: a status value, a member id, a priority bucket,
    /// or a due-date bucket.
    GroupId
}

id_type! {
    /// Identifier of a team member (assignee).
    MemberId
}

/// Reserved group id for entities with no assignee.
pub const UNASSIGNED_GROUP: &str = "unassigned";

impl GroupId {
    /// The reserved group for entities with no assignee.
    pub fn unassigned() -> Self {
        Self(UNASSIGNED_GROUP.to_string())
    }

    /// Whether this is the reserved unassigned group.
    pub fn is_unassigned(&self) -> bool {
        self.0 == UNASSIGNED_GROUP
    }
}

impl From<&MemberId> for GroupId {
    fn from(member: &MemberId) -> Self {
        Self(member.as_str().to_string())
    }
}
