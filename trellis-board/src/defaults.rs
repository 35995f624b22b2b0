//! Built-in directories for boards that have not customized theirs.

use crate::types::StatusDef;

/// The default workflow statuses, in board order.
///
/// These match the remote API's status enum; boards with a customized
/// workflow pass their own list through [`crate::types::GroupContext`].
pub fn default_statuses() -> Vec<StatusDef> {
    vec![
        StatusDef::new("todo", "To Do"),
        StatusDef::new("in_progress", "In Progress"),
        StatusDef::new("review", "In Review"),
        StatusDef::new("done", "Done"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_statuses_order() {
        let statuses = default_statuses();
        assert_eq!(statuses.len(), 4);
        assert_eq!(statuses[0].id.as_str(), "todo");
        assert_eq!(statuses[3].id.as_str(), "done");
    }
}
