//! Orchestration for the interactive single-item move.
//!
//! # Overview
//!
//! One call per drag gesture: the caller hands over the scope's items
//! sorted ascending by position, the id being moved, and where it should
//! land. The fast path produces exactly one `(id, position)` pair; the
//! rare exhaustion path splices the moved item into place and renumbers the
//! whole scope. Either way the result is a plan — persistence, scope
//! resolution, and cross-device merge all belong to external collaborators.
//!
//! Two devices reordering the same scope offline can diverge once synced;
//! this crate makes no attempt to reconcile that (accepted limitation of
//! the local-first model).

#![allow(clippy::must_use_candidate)]

use tracing::{debug, warn};

use crate::error::OrderError;
use crate::keyspace::OrderKeySpace;
use crate::model::{OrderedItem, PositionUpdate};
use crate::planner::{self, PlanResult};
use crate::rebalance::rebalance;

/// The resolved plan for one interactive move.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderOutcome {
    /// The moved item's new sort key.
    pub new_position: f64,
    /// True when precision exhaustion forced a full scope renumber.
    pub rebalanced: bool,
    /// The pair set to persist: one pair on the fast path, the whole scope
    /// after a rebalance (atomically, all-or-nothing).
    pub updates: Vec<PositionUpdate>,
}

/// Move `moving_id` to `target_index` within its scope.
///
/// `scope_items` must be exactly the siblings sharing one scope key, sorted
/// ascending by current position. Applying the returned updates and reading
/// the scope back in position order yields the moved item at
/// `target_index` with every other sibling's relative order intact.
///
/// # Errors
///
/// Returns [`OrderError::ItemNotFound`] when the scope is empty or does not
/// contain `moving_id`, and [`OrderError::TargetOutOfBounds`] when
/// `target_index >= scope_items.len()`.
pub fn reorder_item(
    keys: &OrderKeySpace,
    scope_items: &[OrderedItem],
    moving_id: &str,
    target_index: usize,
) -> Result<ReorderOutcome, OrderError> {
    if let Some(first) = scope_items.first() {
        if scope_items.iter().any(|s| s.scope != first.scope) {
            // Scope resolution is the caller's contract; a mixed batch here
            // means the query layer grouped wrong.
            warn!(moving_id, "reorder input spans multiple scope keys");
        }
    }

    match planner::plan(keys, scope_items, moving_id, target_index)? {
        PlanResult::SingleKey(new_position) => {
            debug!(moving_id, target_index, new_position, "planned single-key move");
            Ok(ReorderOutcome {
                new_position,
                rebalanced: false,
                updates: vec![PositionUpdate {
                    id: moving_id.to_string(),
                    position: new_position,
                }],
            })
        }
        PlanResult::NeedsRebalance => {
            debug!(
                moving_id,
                target_index,
                scope_len = scope_items.len(),
                "position gap exhausted; renumbering scope"
            );
            let desired = splice_to_target(scope_items, moving_id, target_index)?;
            let updates = rebalance(keys, &desired);
            let new_position = keys.key_for_slot(target_index);
            Ok(ReorderOutcome {
                new_position,
                rebalanced: true,
                updates,
            })
        }
    }
}

/// Initial position for an item being created in this scope: append.
pub fn append_position(keys: &OrderKeySpace, scope_items: &[OrderedItem]) -> f64 {
    planner::append_key(keys, scope_items)
}

/// The scope in final desired order: `moving_id` removed from its current
/// slot and spliced back in at `target_index`.
fn splice_to_target(
    scope_items: &[OrderedItem],
    moving_id: &str,
    target_index: usize,
) -> Result<Vec<OrderedItem>, OrderError> {
    let moving = scope_items
        .iter()
        .find(|s| s.id == moving_id)
        .ok_or_else(|| OrderError::not_found(moving_id))?;

    let mut desired: Vec<OrderedItem> = scope_items
        .iter()
        .filter(|s| s.id != moving_id)
        .cloned()
        .collect();
    desired.insert(target_index, moving.clone());
    Ok(desired)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::model::{CategoryKind, ScopeKey};

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn scope(positions: &[(&str, f64)]) -> Vec<OrderedItem> {
        positions
            .iter()
            .map(|(id, pos)| OrderedItem::new(id, ScopeKey::root(CategoryKind::Expense), *pos))
            .collect()
    }

    /// Apply updates to the scope, sort by position, return the id order.
    fn resulting_order(items: &[OrderedItem], updates: &[PositionUpdate]) -> Vec<String> {
        let mut after: Vec<(String, f64)> = items
            .iter()
            .map(|item| {
                let position = updates
                    .iter()
                    .find(|u| u.id == item.id)
                    .map_or(item.position, |u| u.position);
                (item.id.clone(), position)
            })
            .collect();
        after.sort_by(|a, b| a.1.total_cmp(&b.1));
        after.into_iter().map(|(id, _)| id).collect()
    }

    // -----------------------------------------------------------------------
    // Fast path
    // -----------------------------------------------------------------------

    #[test]
    fn interior_move_writes_one_row() {
        // [10, 20, 30, 40, 50] as a..e; move e to index 1.
        let items = scope(&[
            ("a", 10.0),
            ("b", 20.0),
            ("c", 30.0),
            ("d", 40.0),
            ("e", 50.0),
        ]);
        let keys = OrderKeySpace::default();
        let outcome = reorder_item(&keys, &items, "e", 1).expect("reorder");

        assert!(!outcome.rebalanced);
        assert!(outcome.new_position > 10.0 && outcome.new_position < 20.0);
        assert_eq!(outcome.updates.len(), 1, "exactly one row write");
        assert_eq!(outcome.updates[0].id, "e");
        assert_eq!(
            resulting_order(&items, &outcome.updates),
            vec!["a", "e", "b", "c", "d"]
        );
    }

    #[test]
    fn move_to_front_and_back() {
        let items = scope(&[("a", 10.0), ("b", 20.0), ("c", 30.0)]);
        let keys = OrderKeySpace::default();

        let front = reorder_item(&keys, &items, "c", 0).expect("to front");
        assert_eq!(resulting_order(&items, &front.updates), vec!["c", "a", "b"]);

        let back = reorder_item(&keys, &items, "a", 2).expect("to back");
        assert_eq!(resulting_order(&items, &back.updates), vec!["b", "c", "a"]);
    }

    #[test]
    fn new_position_matches_the_single_update() {
        let items = scope(&[("a", 10.0), ("b", 20.0)]);
        let keys = OrderKeySpace::default();
        let outcome = reorder_item(&keys, &items, "b", 0).expect("reorder");
        assert_eq!(outcome.new_position, outcome.updates[0].position);
    }

    // -----------------------------------------------------------------------
    // Rebalance path
    // -----------------------------------------------------------------------

    #[test]
    fn spent_gap_renumbers_whole_scope() {
        // Gap of 1.0 under the default increment: inserting between forces
        // a rebalance and uniform spacing.
        let items = scope(&[("a", 10.0), ("b", 11.0), ("c", 900.0)]);
        let keys = OrderKeySpace::default();
        let outcome = reorder_item(&keys, &items, "c", 1).expect("reorder");

        assert!(outcome.rebalanced);
        assert_eq!(outcome.updates.len(), 3, "whole scope renumbered");
        let positions: Vec<f64> = outcome.updates.iter().map(|u| u.position).collect();
        assert_eq!(positions, vec![1000.0, 2000.0, 3000.0]);
        assert_eq!(
            resulting_order(&items, &outcome.updates),
            vec!["a", "c", "b"]
        );
        assert_eq!(outcome.new_position, 2000.0);
    }

    #[test]
    fn rebalanced_new_position_belongs_to_moved_item() {
        let items = scope(&[("a", 10.0), ("b", 10.5), ("c", 11.0)]);
        let keys = OrderKeySpace::default();
        let outcome = reorder_item(&keys, &items, "a", 1).expect("reorder");
        assert!(outcome.rebalanced);
        let moved = outcome
            .updates
            .iter()
            .find(|u| u.id == "a")
            .expect("moved item update");
        assert_eq!(moved.position, outcome.new_position);
    }

    #[test]
    fn repeated_wedging_eventually_rebalances() {
        // Ping-pong two items into the gap under a third. Each round halves
        // the live gap; rebalanced must flip within a bounded number of
        // rounds, after which spacing is uniform again.
        let keys = OrderKeySpace::default();
        let mut items = scope(&[("a", 1000.0), ("x", 2000.0), ("y", 3000.0)]);
        let mut rebalanced = false;

        for round in 0..64 {
            let moving = if round % 2 == 0 { "y" } else { "x" };
            let outcome = reorder_item(&keys, &items, moving, 1).expect("reorder");
            for update in &outcome.updates {
                let item = items
                    .iter_mut()
                    .find(|i| i.id == update.id)
                    .expect("known id");
                item.position = update.position;
            }
            items.sort_by(|l, r| l.position.total_cmp(&r.position));
            if outcome.rebalanced {
                rebalanced = true;
                break;
            }
        }

        assert!(rebalanced, "gap never exhausted");
        let gaps: Vec<f64> = items.windows(2).map(|w| w[1].position - w[0].position).collect();
        assert!(
            gaps.iter().all(|gap| *gap == keys.increment()),
            "gaps after rebalance: {gaps:?}"
        );
    }

    // -----------------------------------------------------------------------
    // Errors
    // -----------------------------------------------------------------------

    #[test]
    fn empty_scope_reports_not_found() {
        let keys = OrderKeySpace::default();
        let err = reorder_item(&keys, &[], "a", 0).unwrap_err();
        assert!(matches!(err, OrderError::ItemNotFound { .. }));
    }

    #[test]
    fn unknown_item_reports_not_found() {
        let items = scope(&[("a", 10.0)]);
        let keys = OrderKeySpace::default();
        let err = reorder_item(&keys, &items, "nope", 0).unwrap_err();
        assert!(matches!(err, OrderError::ItemNotFound { item_id } if item_id == "nope"));
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let items = scope(&[("a", 10.0), ("b", 20.0)]);
        let keys = OrderKeySpace::default();
        let err = reorder_item(&keys, &items, "a", 5).unwrap_err();
        assert!(matches!(err, OrderError::TargetOutOfBounds { index: 5, len: 2 }));
    }

    // -----------------------------------------------------------------------
    // append_position
    // -----------------------------------------------------------------------

    #[test]
    fn append_position_defaults_new_items_to_the_end() {
        let keys = OrderKeySpace::default();
        assert_eq!(append_position(&keys, &[]), 1000.0);

        let items = scope(&[("a", 400.0)]);
        assert_eq!(append_position(&keys, &items), 1400.0);
    }
}
