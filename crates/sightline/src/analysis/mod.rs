//! Governance queries over a loaded snapshot.
//!
//! Every function here borrows from the snapshot and returns
//! references in document order. Nothing in this module allocates
//! copies of records or reorders them.

mod impact;
mod orphans;

pub use impact::{affected_dashboards, resolve_dataset_by_name};
pub use orphans::find_orphans;
