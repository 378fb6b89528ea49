// hn-stories: the newest Hacker News stories behind a ten-minute cache.

pub mod cache;
pub mod error;
pub mod hackernews;
pub mod server;
pub mod service;
