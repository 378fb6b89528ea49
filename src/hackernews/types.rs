// Hacker News API response types.
// Defines structs for deserializing Hacker News item responses.

use serde::{Deserialize, Serialize};

/// A Hacker News story as returned by the item endpoint.
///
/// Upstream items carry more fields (`by`, `score`, `time`, ...); only the
/// ones the service exposes are modeled, the rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    pub title: String,
    pub url: Option<String>,
}
