// Story fetch service.
// Cache-first orchestration: resolve the newest story IDs, fetch each
// story sequentially, cache the aggregated list for ten minutes.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::cache::StoryCache;
use crate::error::Result;
use crate::hackernews::{HackerNewsClient, Story};

/// Cache key for the aggregated newest-stories list. Single global entry.
pub const CACHE_KEY: &str = "newest-stories";

/// How long a fetched list stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// Upper bound on stories resolved per refresh.
pub const MAX_STORIES: usize = 200;

/// Service that fetches the newest stories from Hacker News.
pub struct HackerNewsService {
    client: HackerNewsClient,
    cache: Arc<dyn StoryCache>,
}

impl HackerNewsService {
    pub fn new(client: HackerNewsClient, cache: Arc<dyn StoryCache>) -> Self {
        Self { client, cache }
    }

    /// Return the newest stories, from cache when fresh.
    ///
    /// On a cache miss the ID-list request is made first; a transport
    /// failure there is the only error callers observe. An ID-list body
    /// that fails to parse yields an empty list (and is not cached, so
    /// the next call retries). Individual stories that fail to fetch or
    /// parse are dropped from the batch.
    pub async fn newest_stories(&self) -> Result<Vec<Story>> {
        if let Some(stories) = self.cache.get(CACHE_KEY) {
            info!(count = stories.len(), "cache hit, returning cached stories");
            return Ok(stories);
        }

        info!("cache miss, fetching stories from the Hacker News API");
        let body = self.client.newest_story_ids_body().await?;

        let ids: Vec<u64> = match serde_json::from_str(&body) {
            Ok(ids) => ids,
            Err(err) => {
                warn!("unparseable story ID list: {}", err);
                return Ok(Vec::new());
            }
        };

        let mut stories = Vec::new();
        for id in ids.into_iter().take(MAX_STORIES) {
            if let Some(story) = self.fetch_story(id).await {
                stories.push(story);
            }
        }

        self.cache.set(CACHE_KEY, stories.clone(), CACHE_TTL);
        info!(count = stories.len(), "stories fetched and cached");

        Ok(stories)
    }

    /// Fetch and parse one story, or `None` if anything fails.
    ///
    /// Transport and parse failures are deliberately not distinguished
    /// here; both drop the story and the batch continues.
    async fn fetch_story(&self, id: u64) -> Option<Story> {
        let body = match self.client.story_body(id).await {
            Ok(body) => body,
            Err(err) => {
                warn!(id, "failed to fetch story: {}", err);
                return None;
            }
        };

        match serde_json::from_str(&body) {
            Ok(story) => Some(story),
            Err(err) => {
                warn!(id, "failed to parse story: {}", err);
                None
            }
        }
    }
}
