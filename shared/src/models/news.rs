//! News aggregation models

use serde::{Deserialize, Serialize};

/// One news article as returned by the provider.
///
/// The provider's field set is not part of our contract, so the payload
/// passes through unmodified. Ordering is whatever the provider returns
/// (publish time descending, per the request's sort parameter).
pub type NewsItem = serde_json::Map<String, serde_json::Value>;

/// News payload served to the dashboard and news pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewsFeed {
    pub articles: Vec<NewsItem>,
}

impl NewsFeed {
    pub fn new(articles: Vec<NewsItem>) -> Self {
        Self { articles }
    }

    /// First `n` articles, for the dashboard teaser.
    pub fn top(&self, n: usize) -> Vec<NewsItem> {
        self.articles.iter().take(n).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> NewsItem {
        let mut item = NewsItem::new();
        item.insert("title".to_string(), title.into());
        item
    }

    #[test]
    fn top_keeps_provider_order() {
        let feed = NewsFeed::new(vec![article("first"), article("second"), article("third")]);
        let teaser = feed.top(2);
        assert_eq!(teaser.len(), 2);
        assert_eq!(teaser[0]["title"], "first");
        assert_eq!(teaser[1]["title"], "second");
    }

    #[test]
    fn top_beyond_feed_length_returns_everything() {
        let feed = NewsFeed::new(vec![article("only")]);
        assert_eq!(feed.top(10).len(), 1);
        assert!(NewsFeed::default().top(3).is_empty());
    }
}
