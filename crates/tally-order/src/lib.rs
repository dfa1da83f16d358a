#![forbid(unsafe_code)]
//! Stable position-key engine for tally's reorderable category lists.
//!
//! Two call sites drive this crate: an interactive drag ([`reorder_item`])
//! that should cost one row write, and a bulk import
//! ([`assign_bulk_order`]) that turns parent-referencing rows into a fully
//! ordered hierarchy. Everything is pure, synchronous computation over
//! in-memory collections — persistence, sync, and scope resolution are the
//! surrounding app's collaborators.
//!
//! # Conventions
//!
//! - **Errors**: domain failures are [`OrderError`]; precision exhaustion
//!   is never an error, it is recovered by rebalancing before returning.
//! - **Logging**: `tracing` macros (`debug!`, `warn!`).

pub mod error;
pub mod hierarchy;
pub mod keyspace;
pub mod model;
pub mod planner;
pub mod rebalance;
pub mod service;

pub use error::OrderError;
pub use hierarchy::{assign_bulk_order, assign_flattened, flatten};
pub use keyspace::OrderKeySpace;
pub use model::{
    CategoryKind, ImportItem, OrderedItem, PositionUpdate, PositionedItem, ScopeKey,
};
pub use planner::{PlanResult, append_key, plan};
pub use rebalance::rebalance;
pub use service::{ReorderOutcome, append_position, reorder_item};
