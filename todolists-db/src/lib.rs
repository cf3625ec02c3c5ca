//! todolists-db: database layer for the todolists web app
//!
//! Issues parameterized SQL against PostgreSQL and reshapes the flat
//! results into the application's view models: lists carrying their
//! todos, and aggregate summaries carrying todo counts.
//!
//! The embedding application resolves a [`DatabaseConfig`], connects
//! once, and hands the pool to a [`ListRepo`] per request:
//!
//! ```no_run
//! use todolists_db::{DatabaseConfig, ListRepo, RunMode};
//! use todolists_db::models::ListName;
//!
//! # async fn demo() -> todolists_db::Result<()> {
//! let config = DatabaseConfig::from_env(RunMode::from_env())?;
//! let pool = todolists_db::connect(&config).await?;
//!
//! let repo = ListRepo::new(&pool);
//! repo.create_new_list(ListName::new("Groceries").unwrap()).await?;
//! for list in repo.all_lists().await? {
//!     println!("{} ({} todos)", list.name, list.todos.len());
//! }
//!
//! todolists_db::disconnect(&pool).await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::{DatabaseConfig, RunMode};
pub use db::{connect, create_pool, disconnect, List, ListRepo, ListSummary, Todo};
pub use error::{Error, Result};
