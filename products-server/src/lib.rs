//! products-server: HTTP API for the products catalog
//!
//! CRUD over two entities: products and their options. Each request is
//! stateless; all state lives in Postgres behind the store traits in
//! [`db::repos`].

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ServerConfig};
