//! Agricultural news client
//!
//! Integrates with the WorldNewsAPI search endpoint. News is decorative
//! on the dashboard, so every failure mode degrades to an empty feed.

use std::time::Duration;

use reqwest::Client;
use shared::NewsItem;

use crate::error::{AppError, AppResult};

/// Search query covering the agricultural beat
const AGRO_QUERY: &str = "agriculture OR farming OR farmer OR crops";

/// News API client
#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    api_key: String,
    base_url: String,
    language: String,
    country: String,
    page_size: u32,
}

impl NewsClient {
    /// Create a new NewsClient
    pub fn new(
        api_key: String,
        base_url: String,
        language: String,
        country: String,
        page_size: u32,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url,
            language,
            country,
            page_size,
        }
    }

    /// Fetch agricultural news sorted by publish time.
    ///
    /// A response without a `news` array is a recoverable empty-result
    /// condition, not a fatal error.
    pub async fn agro_news(&self) -> AppResult<Vec<NewsItem>> {
        if self.api_key.is_empty() {
            tracing::warn!("news API key not configured, serving empty feed");
            return Ok(Vec::new());
        }

        let url = format!("{}/search-news", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("api-key", self.api_key.as_str()),
                ("text", AGRO_QUERY),
                ("language", self.language.as_str()),
                ("number", &self.page_size.to_string()),
                ("sort", "publish-time"),
                ("country", self.country.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("news request failed: {}", e)))?;

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("malformed news response: {}", e)))?;

        Ok(extract_articles(&data))
    }

    /// Fetch news, degrading to an empty feed on gateway failure.
    pub async fn agro_news_or_empty(&self) -> Vec<NewsItem> {
        match self.agro_news().await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!("news lookup degraded to empty feed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Pull the `news` array out of the provider payload; anything else in
/// the response body is passed through untouched per article.
fn extract_articles(data: &serde_json::Value) -> Vec<NewsItem> {
    match data.get("news").and_then(|n| n.as_array()) {
        Some(items) => items
            .iter()
            .filter_map(|item| item.as_object().cloned())
            .collect(),
        None => {
            tracing::warn!("'news' array missing in provider response");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_articles_in_provider_order() {
        let data = serde_json::json!({
            "news": [
                {"id": 1, "title": "Monsoon outlook improves", "publish_date": "2025-06-02"},
                {"id": 2, "title": "Wheat MSP raised", "publish_date": "2025-06-01"}
            ]
        });

        let articles = extract_articles(&data);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0]["title"], "Monsoon outlook improves");
        assert_eq!(articles[1]["title"], "Wheat MSP raised");
    }

    #[test]
    fn missing_news_key_is_empty_not_error() {
        let data = serde_json::json!({"status": "error", "message": "quota exceeded"});
        assert!(extract_articles(&data).is_empty());
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let data = serde_json::json!({"news": [{"title": "ok"}, 42, "junk"]});
        assert_eq!(extract_articles(&data).len(), 1);
    }
}
