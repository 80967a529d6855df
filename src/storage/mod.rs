//! Graph storage layer
//!
//! Provides the arena-backed collaboration graph built from publication lists.

pub mod collab;

pub use collab::{AuthorId, CollabGraph, GraphError};
