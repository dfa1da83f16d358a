//! Single-move planning over one ordering scope.
//!
//! # Overview
//!
//! Given a scope's siblings sorted ascending by position and a desired
//! target index for one of them, [`plan`] computes the cheapest way to
//! realize the move. Almost always that is a single new key bisected
//! between the two neighbors of the target slot — one row write. When the
//! local gap is spent, the planner reports [`PlanResult::NeedsRebalance`]
//! instead and the caller renumbers the whole scope.
//!
//! The predicate-then-branch split is deliberate: every write here is a row
//! that must ride through the sync layer, so the common case stays at one
//! row and the expensive full-scope path stays rare.

#![allow(clippy::must_use_candidate)]

use crate::error::OrderError;
use crate::keyspace::OrderKeySpace;
use crate::model::OrderedItem;

/// Outcome of planning a single move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanResult {
    /// The move is realized by writing this one key to the moved row.
    SingleKey(f64),
    /// The target gap is numerically spent; the scope must be renumbered.
    NeedsRebalance,
}

/// Plan a move of `moving_id` to `target_index` among `siblings`.
///
/// `siblings` is the full scope, sorted ascending by position, including
/// the moving item. `target_index` addresses the final order, so it ranges
/// over `0..siblings.len()`.
///
/// Neighbor bounds are taken from the siblings that are *not* moving: a
/// slot before all of them extrapolates one increment below the first key,
/// a slot after all of them extrapolates one increment above the last.
///
/// # Errors
///
/// Returns [`OrderError::ItemNotFound`] if `moving_id` is not in the scope
/// and [`OrderError::TargetOutOfBounds`] if `target_index >= len`. Invalid
/// indices are never clamped.
pub fn plan(
    keys: &OrderKeySpace,
    siblings: &[OrderedItem],
    moving_id: &str,
    target_index: usize,
) -> Result<PlanResult, OrderError> {
    let len = siblings.len();
    let Some(moving_idx) = siblings.iter().position(|s| s.id == moving_id) else {
        return Err(OrderError::not_found(moving_id));
    };
    if target_index >= len {
        return Err(OrderError::TargetOutOfBounds {
            index: target_index,
            len,
        });
    }

    // The siblings that stay put, in their current relative order.
    let others: Vec<&OrderedItem> = siblings
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != moving_idx)
        .map(|(_, s)| s)
        .collect();

    // Single-item scope: the move is a no-op; reissue the first slot key.
    if others.is_empty() {
        return Ok(PlanResult::SingleKey(keys.key_for_slot(0)));
    }

    let (lower, upper) = slot_bounds(keys, &others, target_index);

    if keys.is_precision_exhausted(lower, upper) {
        return Ok(PlanResult::NeedsRebalance);
    }
    Ok(PlanResult::SingleKey(keys.midpoint(lower, upper)))
}

/// Key for appending a newly created item at the end of a scope.
///
/// One increment past the current last key, or the first slot key when the
/// scope is empty. This is the default position for item creation.
pub fn append_key(keys: &OrderKeySpace, siblings: &[OrderedItem]) -> f64 {
    siblings
        .last()
        .map_or_else(|| keys.key_for_slot(0), |s| s.position + keys.increment())
}

/// Neighbor bounds for inserting at `target_index` into `others`.
fn slot_bounds(keys: &OrderKeySpace, others: &[&OrderedItem], target_index: usize) -> (f64, f64) {
    if target_index == 0 {
        let upper = others[0].position;
        (upper - keys.increment(), upper)
    } else if target_index >= others.len() {
        let lower = others[others.len() - 1].position;
        (lower, lower + keys.increment())
    } else {
        (
            others[target_index - 1].position,
            others[target_index].position,
        )
    }
}
