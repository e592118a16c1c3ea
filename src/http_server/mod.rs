//! # libris HTTP Server Module
//!
//! Axum server exposing the book catalog as a JSON API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `GET /`, `POST /` - List / create books
//! - `GET|PUT|DELETE /{id}` - Single-book operations
//! - `/books/*` - Same catalog router under the service prefix

pub mod books_routes;
pub mod config;
pub mod errors;
pub mod server;

pub use books_routes::{books_routes, BooksState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
