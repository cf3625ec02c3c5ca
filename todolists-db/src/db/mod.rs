//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Reads use LEFT JOINs - lists without todos are never dropped
//! - Every statement binds values positionally - no string interpolation
//! - Constraint violations surface as raw database errors

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{connect, create_pool, disconnect};
pub use repos::*;
