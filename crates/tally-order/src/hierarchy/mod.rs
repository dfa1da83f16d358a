//! Bulk-import hierarchy handling.
//!
//! Import payloads carry parent references but no positions. This module
//! linearizes the parent/child graph into a preorder sequence and assigns
//! increment-spaced keys per ordering scope.
//!
//! ## Submodules
//!
//! - [`flatten`] — cycle-rejecting preorder linearization of parent
//!   references, with an orphan sweep so malformed input loses no rows.
//! - [`bulk`] — position assignment over the flattened sequence, one
//!   counter for roots and one shared across children.

pub mod bulk;
pub mod flatten;

pub use bulk::{assign_bulk_order, assign_flattened};
pub use flatten::flatten;
