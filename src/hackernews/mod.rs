// Hacker News API module.
// Provides the client and types for the public Firebase v0 REST API.

pub mod client;
pub mod types;

pub use client::HackerNewsClient;
pub use types::Story;
