//! Book record and genre definitions.

use serde::{Deserialize, Serialize};

/// A single book record.
///
/// The identifier is caller-supplied; the catalog never generates ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: Genre,
}

/// Closed set of genres accepted on the wire.
///
/// Serialized as upper snake case (`SCI_FI`, `NON_FICTION`, ...); any
/// other string fails deserialization and surfaces as a schema error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    SciFi,
    Fantasy,
    Horror,
    Mystery,
    Romance,
    Thriller,
    NonFiction,
}
