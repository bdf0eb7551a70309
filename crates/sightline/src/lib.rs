//! Sightline - governance and lineage analysis for BI workspaces.
//!
//! This crate provides both a CLI application and a library for answering
//! the governance questions a workspace snapshot raises: which datasets are
//! orphaned, which dashboards a dataset change would break, and what the
//! dependency graph looks like.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod analysis;
pub mod error;
pub mod export;
pub mod graph;
pub mod index;
pub mod session;

// Public CLI module (needed by binary)
pub mod cli;

// Output formatting (needed by CLI execution)
pub mod output;

pub use error::{Error, Result};
pub use session::Session;
