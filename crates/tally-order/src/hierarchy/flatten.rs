//! Preorder linearization of parent-referencing import rows.
//!
//! # Overview
//!
//! Import rows reference parents by id, in arbitrary order. [`flatten`]
//! rewrites them as a preorder sequence: every parent immediately before
//! its children, children in input order, roots in input order. Cycles are
//! rejected with an error naming a node on the cycle; rows whose parent id
//! is missing (or that are otherwise disconnected) are swept after the
//! declared roots rather than silently dropped.
//!
//! # Design
//!
//! Plain recursive DFS over an id-keyed children map. The recursion carries
//! two explicit marker sets — "currently on the recursion path" and "fully
//! emitted" — as parameters rather than captured state, keeping the
//! traversal reentrant. Scope sizes are a few hundred rows, well within
//! recursion limits.
//!
//! Upstream shape validation already guarantees single-level nesting; the
//! cycle check is re-done here as a safety net because a cycle that slips
//! through would otherwise hang or corrupt the import.

use std::collections::{HashMap, HashSet};

use crate::error::OrderError;
use crate::model::ImportItem;

/// Flatten `items` into preorder, or fail on the first cycle found.
///
/// On success the output contains every input row exactly once. On error
/// nothing is returned — there is no partial sequence a caller could
/// mistakenly persist.
///
/// # Errors
///
/// Returns [`OrderError::CycleDetected`] naming the first row reached
/// twice on the traversal path (by display name when the row has one).
pub fn flatten(items: &[ImportItem]) -> Result<Vec<ImportItem>, OrderError> {
    let mut children: HashMap<&str, Vec<&ImportItem>> = HashMap::new();
    for item in items {
        if let Some(parent_id) = &item.parent_id {
            children.entry(parent_id.as_str()).or_default().push(item);
        }
    }

    let mut out: Vec<ImportItem> = Vec::with_capacity(items.len());
    let mut on_path: HashSet<&str> = HashSet::new();
    let mut emitted: HashSet<&str> = HashSet::new();

    // Declared roots first, in input order.
    for root in items.iter().filter(|i| i.parent_id.is_none()) {
        visit(root, &children, &mut on_path, &mut emitted, &mut out)?;
    }

    // Orphan sweep: rows pointing at a missing parent, or trapped in a
    // parent chain no root reaches. Nothing is dropped; cycles found here
    // still fail.
    for item in items {
        if !emitted.contains(item.id.as_str()) {
            visit(item, &children, &mut on_path, &mut emitted, &mut out)?;
        }
    }

    Ok(out)
}

/// Emit `node` then recurse into its children in input order.
fn visit<'a>(
    node: &'a ImportItem,
    children: &HashMap<&str, Vec<&'a ImportItem>>,
    on_path: &mut HashSet<&'a str>,
    emitted: &mut HashSet<&'a str>,
    out: &mut Vec<ImportItem>,
) -> Result<(), OrderError> {
    if on_path.contains(node.id.as_str()) {
        return Err(OrderError::cycle(&node.id, node.name.as_deref()));
    }
    if !emitted.insert(node.id.as_str()) {
        return Ok(());
    }

    on_path.insert(node.id.as_str());
    out.push(node.clone());
    if let Some(kids) = children.get(node.id.as_str()) {
        for kid in kids.iter().copied() {
            visit(kid, children, on_path, emitted, out)?;
        }
    }
    on_path.remove(node.id.as_str());

    Ok(())
}
