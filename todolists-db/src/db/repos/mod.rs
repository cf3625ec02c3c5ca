//! Repository implementations for database access
//!
//! Repositories borrow the shared pool and follow these patterns:
//! - Reads use LEFT JOINs so lists without todos still appear
//! - Todo mutations match on both todo id and owning list id
//! - Inserts hand back the created record via RETURNING

pub mod lists;

pub use lists::{List, ListRepo, ListSummary, Todo};
