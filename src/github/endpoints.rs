// GitHub endpoint functions.
// Fetches page decoration data through the time-windowed cache, keyed by full request URL.

use std::time::Duration;

use serde_json::Value;

use crate::cache::TimedCache;
use crate::error::Result;

use super::client::GitHubClient;
use super::types::{EmojiMap, LanguageColors, RepoDetails, RepoSlug};

impl GitHubClient {
    /// URL of the emoji table.
    pub fn emojis_url(&self) -> String {
        format!("{}/emojis", self.api_base())
    }

    /// URL of a repository's metadata.
    pub fn repo_url(&self, slug: &RepoSlug) -> String {
        format!("{}/repos/{}/{}", self.api_base(), slug.owner, slug.repo)
    }

    /// Fetch any JSON document through the cache. The body is stored verbatim.
    pub async fn cached_json(
        &mut self,
        cache: &TimedCache,
        url: &str,
        ttl: Duration,
    ) -> Result<Value> {
        cache.get(url, || self.get_json::<Value>(url), ttl).await
    }

    /// Get the emoji shortcode table.
    pub async fn get_emojis(&mut self, cache: &TimedCache, ttl: Duration) -> Result<EmojiMap> {
        let url = self.emojis_url();
        let value = self.cached_json(cache, &url, ttl).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get the language colour table.
    pub async fn get_language_colors(
        &mut self,
        cache: &TimedCache,
        ttl: Duration,
    ) -> Result<LanguageColors> {
        let url = self.colors_url().to_string();
        let value = self.cached_json(cache, &url, ttl).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Get a repository's card details.
    pub async fn get_repo_details(
        &mut self,
        cache: &TimedCache,
        slug: &RepoSlug,
        ttl: Duration,
    ) -> Result<RepoDetails> {
        let url = self.repo_url(slug);
        let value = self.cached_json(cache, &url, ttl).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CachedData, MemoryStore, Store};
    use crate::clock::ManualClock;
    use crate::github::client::GITHUB_COLORS_URL;
    use std::sync::Arc;

    fn offline_client() -> GitHubClient {
        // Unroutable base so any request that escapes the cache fails fast
        GitHubClient::new(
            None,
            "http://127.0.0.1:9",
            "http://127.0.0.1:9/colors.json",
            Duration::from_millis(200),
        )
        .unwrap()
    }

    fn seeded_cache(entries: &[(&str, Value)]) -> TimedCache {
        let store = Arc::new(MemoryStore::new());
        for (key, data) in entries {
            let text = serde_json::to_string(&CachedData::new(data, 1_000)).unwrap();
            store.set_item(key, text).unwrap();
        }
        TimedCache::new(store, Arc::new(ManualClock::new(2_000)))
    }

    #[test]
    fn test_urls() {
        let client = GitHubClient::new(
            None,
            "https://api.github.com",
            GITHUB_COLORS_URL,
            Duration::from_secs(1),
        )
        .unwrap();
        let slug: RepoSlug = "octo/hello".parse().unwrap();

        assert_eq!(client.emojis_url(), "https://api.github.com/emojis");
        assert_eq!(client.repo_url(&slug), "https://api.github.com/repos/octo/hello");
    }

    #[tokio::test]
    async fn test_fresh_entries_are_served_without_network() {
        let mut client = offline_client();
        let slug: RepoSlug = "octo/hello".parse().unwrap();
        let cache = seeded_cache(&[
            (
                "http://127.0.0.1:9/repos/octo/hello",
                serde_json::json!({"description": "hi", "language": "Rust", "stargazers_count": 3, "forks": 1}),
            ),
            (
                "http://127.0.0.1:9/emojis",
                serde_json::json!({"tada": "https://example.com/tada.png"}),
            ),
            (
                "http://127.0.0.1:9/colors.json",
                serde_json::json!({"Rust": {"color": "#dea584"}}),
            ),
        ]);

        let details = client
            .get_repo_details(&cache, &slug, Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(details.description.as_deref(), Some("hi"));
        assert_eq!(details.stargazers_count, 3);

        let emojis = client.get_emojis(&cache, Duration::from_secs(60)).await.unwrap();
        assert_eq!(emojis["tada"], "https://example.com/tada.png");

        let colors = client
            .get_language_colors(&cache, Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(colors["Rust"].color.as_deref(), Some("#dea584"));
    }

    #[tokio::test]
    async fn test_stale_entry_with_unreachable_api_is_an_error() {
        let mut client = offline_client();
        let slug: RepoSlug = "octo/hello".parse().unwrap();
        let cache = seeded_cache(&[(
            "http://127.0.0.1:9/repos/octo/hello",
            serde_json::json!({"description": "stale"}),
        )]);

        // 1s old entry with a 10ms window
        let result = client
            .get_repo_details(&cache, &slug, Duration::from_millis(10))
            .await;
        assert!(result.is_err());
    }
}
