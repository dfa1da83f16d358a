//! Full-scope renumbering with uniform spacing.
//!
//! A rebalance resets precision for a whole scope: every sibling gets
//! `(index + 1) * increment` in the caller-supplied order. It never changes
//! relative order, only spacing, and it is all-or-nothing — the returned
//! pair set must be persisted in one transaction so no reader observes a
//! half-renumbered scope.

#![allow(clippy::must_use_candidate)]

use crate::keyspace::OrderKeySpace;
use crate::model::{OrderedItem, PositionUpdate};

/// Renumber `in_desired_order` with uniform spacing.
///
/// The input is already in the final desired order: the caller splices a
/// moved item into its target slot first, or passes the scope's natural
/// order for a plain maintenance renumber. Returns one update per item.
pub fn rebalance(keys: &OrderKeySpace, in_desired_order: &[OrderedItem]) -> Vec<PositionUpdate> {
    in_desired_order
        .iter()
        .enumerate()
        .map(|(index, item)| PositionUpdate {
            id: item.id.clone(),
            position: keys.key_for_slot(index),
        })
        .collect()
}
