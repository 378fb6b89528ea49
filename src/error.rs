// Error types for the hn-stories service.
// Wraps upstream API failures and maps them onto HTTP responses.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Hacker News API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Hacker News API returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

// The exposed surface has no finer error taxonomy: anything that escapes
// the service becomes a 500 with a plain-text message.
impl ResponseError for NewsError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body("An error occurred while fetching the newest stories.")
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;
