//! Error taxonomy for ordering operations.
//!
//! Three failure kinds are surfaced to callers: the item to move is missing
//! from its scope, the requested target index is out of bounds, or the bulk
//! hierarchy contains a parent/child cycle. All three are logic errors on
//! the input — nothing transient, so no retries happen here.
//!
//! Precision exhaustion is deliberately *not* in this enum: it is an
//! internal plan outcome that triggers the rebalance path and is fully
//! recovered before a result is returned.

/// A domain error from the ordering engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// The item to move is not present in the supplied scope.
    #[error("item '{item_id}' not found in its ordering scope")]
    ItemNotFound { item_id: String },

    /// The requested target index exceeds the scope size.
    #[error("target index {index} is out of bounds for a scope of {len} item(s)")]
    TargetOutOfBounds { index: usize, len: usize },

    /// The bulk hierarchy contains a parent/child cycle. Carries the first
    /// node reached twice on the traversal path, by display name when the
    /// row has one.
    #[error("cycle detected in category hierarchy at {}", cycle_label(.name.as_deref(), .item_id))]
    CycleDetected {
        item_id: String,
        name: Option<String>,
    },
}

impl OrderError {
    pub(crate) fn not_found(item_id: &str) -> Self {
        Self::ItemNotFound {
            item_id: item_id.to_string(),
        }
    }

    pub(crate) fn cycle(item_id: &str, name: Option<&str>) -> Self {
        Self::CycleDetected {
            item_id: item_id.to_string(),
            name: name.map(str::to_string),
        }
    }
}

fn cycle_label(name: Option<&str>, item_id: &str) -> String {
    match name {
        Some(n) => format!("'{n}' (id '{item_id}')"),
        None => format!("'{item_id}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_item() {
        let e = OrderError::not_found("cat-groceries");
        assert!(e.to_string().contains("cat-groceries"));
    }

    #[test]
    fn out_of_bounds_names_index_and_len() {
        let e = OrderError::TargetOutOfBounds { index: 7, len: 3 };
        let s = e.to_string();
        assert!(s.contains('7'), "display: {s}");
        assert!(s.contains('3'), "display: {s}");
    }

    #[test]
    fn cycle_prefers_display_name() {
        let e = OrderError::cycle("cat-9", Some("Utilities"));
        let s = e.to_string();
        assert!(s.contains("Utilities"), "display: {s}");
        assert!(s.contains("cat-9"), "display: {s}");
    }

    #[test]
    fn cycle_falls_back_to_id() {
        let e = OrderError::cycle("cat-9", None);
        assert!(e.to_string().contains("cat-9"));
    }
}
