// Service entry point.
// Wires up logging, the upstream client, the cache, and the HTTP server.

use std::sync::Arc;

use actix_web::web;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hn_stories::cache::MemoryCache;
use hn_stories::hackernews::HackerNewsClient;
use hn_stories::server::{self, AppState};
use hn_stories::service::HackerNewsService;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let client = match HackerNewsClient::new() {
        Ok(client) => client,
        Err(err) => {
            error!("failed to build the Hacker News client: {}", err);
            std::process::exit(1);
        }
    };

    let service = HackerNewsService::new(client, Arc::new(MemoryCache::new()));
    let state = web::Data::new(AppState { service });

    info!("listening on {}", bind_addr);
    server::run(state, &bind_addr).await
}
