// HTTP surface.
// One endpoint returning the newest stories, plus a liveness probe.

use actix_web::{App, HttpResponse, HttpServer, get, web};
use tracing::error;

use crate::error::Result;
use crate::service::HackerNewsService;

/// Shared application state, built once at startup.
pub struct AppState {
    pub service: HackerNewsService,
}

/// Get the newest Hacker News stories.
#[get("/api/stories")]
pub async fn get_stories(state: web::Data<AppState>) -> Result<HttpResponse> {
    let stories = state.service.newest_stories().await.inspect_err(|err| {
        error!("failed to fetch the newest stories: {}", err);
    })?;

    Ok(HttpResponse::Ok().json(stories))
}

/// Liveness probe.
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

/// Run the HTTP server until shutdown.
pub async fn run(state: web::Data<AppState>, bind_addr: &str) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(get_stories)
            .service(health)
    })
    .bind(bind_addr)?
    .run()
    .await
}
