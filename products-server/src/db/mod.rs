//! Database layer - connection pool, migrations, and repositories
//!
//! # Design Principles
//!
//! - Connection pool with a small explicit cap - no Arc<Mutex<Connection>>
//! - One SQL statement per operation; atomicity delegated to Postgres
//! - Rely on DB constraints (FK, cascade) instead of check-then-write

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
