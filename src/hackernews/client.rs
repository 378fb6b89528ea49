// Hacker News API HTTP client.
// Wraps one long-lived reqwest client around the two v0 endpoints the
// service consumes.

use reqwest::{
    Client, Response,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{NewsError, Result};

const HACKER_NEWS_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

/// Client for the public Hacker News Firebase API.
pub struct HackerNewsClient {
    client: Client,
    base_url: String,
}

impl HackerNewsClient {
    /// Create a client against the production Hacker News API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(HACKER_NEWS_API_BASE)
    }

    /// Create a client against an alternate base URL (no trailing slash).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("hn-stories"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(NewsError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the raw body of the newest-story-IDs endpoint.
    pub async fn newest_story_ids_body(&self) -> Result<String> {
        self.get_text("/newstories.json").await
    }

    /// Fetch the raw body of the item endpoint for one story ID.
    pub async fn story_body(&self, id: u64) -> Result<String> {
        self.get_text(&format!("/item/{}.json", id)).await
    }

    /// Make a GET request and return the response body as text.
    async fn get_text(&self, endpoint: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).send().await.map_err(NewsError::Api)?;
        let response = check_response(response)?;
        response.text().await.map_err(NewsError::Api)
    }
}

/// Check response status and convert non-success into an error.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(NewsError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}
