//! Books HTTP Routes
//!
//! CRUD endpoints over the in-memory catalog.

use std::sync::{Arc, RwLock};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use indexmap::IndexMap;

use super::errors::{ApiError, ApiResult};
use crate::catalog::{Book, Catalog};

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers.
///
/// Handlers receive this explicitly via axum `State`; there is no
/// module-level singleton. All catalog access goes through the lock, and
/// no handler holds the guard across an await point.
pub struct BooksState {
    catalog: RwLock<Catalog>,
}

impl BooksState {
    /// Empty catalog
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Catalog::new()),
        }
    }

    /// Catalog pre-populated with the seed records
    pub fn seeded() -> Self {
        Self {
            catalog: RwLock::new(Catalog::seed()),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Catalog> {
        self.catalog.read().expect("catalog lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().expect("catalog lock poisoned")
    }
}

impl Default for BooksState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Books Routes
// ==================

/// Create the books router
pub fn books_routes(state: Arc<BooksState>) -> Router {
    Router::new()
        .route("/", get(list_books_handler).post(create_book_handler))
        .route(
            "/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_book_handler(
    State(state): State<Arc<BooksState>>,
    Json(book): Json<Book>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    state.write().add(book.clone())?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn list_books_handler(
    State(state): State<Arc<BooksState>>,
) -> Json<IndexMap<u32, Book>> {
    Json(state.read().list().clone())
}

async fn get_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Book>> {
    let book = state.read().get(id).cloned().ok_or(ApiError::BookNotFound)?;
    Ok(Json(book))
}

async fn update_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(id): Path<u32>,
    Json(book): Json<Book>,
) -> ApiResult<Json<Book>> {
    let updated = state.write().update(id, book)?;
    Ok(Json(updated))
}

async fn delete_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(id): Path<u32>,
) -> ApiResult<StatusCode> {
    state.write().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
