//! Position assignment for a flattened import batch.
//!
//! Two independent monotonically increasing counters drive assignment: one
//! for root rows, one shared across *all* child rows. Roots and children
//! sort in different scopes (a child's scope is its parent), so the two
//! sequences never compare against each other. A single shared child
//! counter is enough because nesting is capped at one level and the
//! preorder sequence already keeps any one parent's children together and
//! in order — positions only need to be increasing within each scope, not
//! unique across scopes.

#![allow(clippy::must_use_candidate)]

use tracing::debug;

use crate::error::OrderError;
use crate::hierarchy::flatten::flatten;
use crate::keyspace::OrderKeySpace;
use crate::model::{ImportItem, PositionedItem};

/// Flatten `items` and assign increment-spaced positions per scope.
///
/// # Errors
///
/// Returns [`OrderError::CycleDetected`] if the parent references contain
/// a cycle; no positions are assigned in that case.
pub fn assign_bulk_order(
    keys: &OrderKeySpace,
    items: &[ImportItem],
) -> Result<Vec<PositionedItem>, OrderError> {
    let flat = flatten(items)?;
    debug!(rows = flat.len(), "assigning bulk import positions");
    Ok(assign_flattened(keys, &flat))
}

/// Assign positions over an already-flattened preorder sequence.
///
/// Exposed separately so a caller that has inspected or adjusted the
/// flattened sequence can run assignment on its own, possibly under a
/// differently configured [`OrderKeySpace`].
pub fn assign_flattened(keys: &OrderKeySpace, flattened: &[ImportItem]) -> Vec<PositionedItem> {
    let mut root_count: usize = 0;
    let mut child_count: usize = 0;

    flattened
        .iter()
        .map(|item| {
            let slot = if item.parent_id.is_none() {
                root_count += 1;
                root_count - 1
            } else {
                child_count += 1;
                child_count - 1
            };
            PositionedItem {
                id: item.id.clone(),
                parent_id: item.parent_id.clone(),
                name: item.name.clone(),
                position: keys.key_for_slot(slot),
            }
        })
        .collect()
}
