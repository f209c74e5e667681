use std::time::Duration;

use chrono::{DateTime, Utc};
use feed_rs::model::Entry;
use feed_rs::parser::{self, ParseFeedError};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::NewsConfig;

/// Shown in place of the news list when the feed yields nothing.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to fetch news at the moment.";

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("feed returned HTTP {0}")]
    Status(StatusCode),
    #[error("failed to parse feed: {0}")]
    Parse(#[from] ParseFeedError),
    #[error("feed contained no entries")]
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsEntry {
    /// 1-based position in the feed
    pub rank: usize,
    pub title: String,
    pub link: String,
    pub image_url: String,
    pub published: Option<DateTime<Utc>>,
}

impl NewsEntry {
    pub fn published_label(&self) -> Option<String> {
        self.published.map(|dt| dt.format("%d %b %Y").to_string())
    }
}

/// What the news section shows for one render.
#[derive(Debug, Clone, PartialEq)]
pub enum NewsPanel {
    Entries(Vec<NewsEntry>),
    Unavailable,
}

impl NewsPanel {
    pub fn entries(&self) -> &[NewsEntry] {
        match self {
            NewsPanel::Entries(entries) => entries,
            NewsPanel::Unavailable => &[],
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, NewsPanel::Unavailable)
    }

    pub fn message(&self) -> &'static str {
        UNAVAILABLE_MESSAGE
    }
}

impl From<Result<Vec<NewsEntry>, NewsError>> for NewsPanel {
    fn from(result: Result<Vec<NewsEntry>, NewsError>) -> Self {
        match result {
            Ok(entries) if !entries.is_empty() => NewsPanel::Entries(entries),
            Ok(_) => NewsPanel::Unavailable,
            Err(e) => {
                warn!("News feed unavailable: {}", e);
                NewsPanel::Unavailable
            }
        }
    }
}

#[derive(Debug)]
pub struct NewsFetcher {
    client: Client,
    feed_url: String,
    max_entries: usize,
    placeholder_image: String,
}

impl NewsFetcher {
    pub fn new(config: &NewsConfig) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(NewsError::Client)?;

        Ok(Self {
            client,
            feed_url: config.feed_url.clone(),
            max_entries: config.max_entries,
            placeholder_image: config.placeholder_image.clone(),
        })
    }

    /// Fetches the feed once and returns up to `max_entries` entries in feed order.
    pub async fn fetch_latest(&self) -> Result<Vec<NewsEntry>, NewsError> {
        info!("Fetching news feed: {}", self.feed_url);

        let response = self.client.get(&self.feed_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Status(status));
        }
        let bytes = response.bytes().await?;

        let entries = Self::parse_entries(&bytes, self.max_entries, &self.placeholder_image)?;
        info!("Fetched {} news entries", entries.len());
        Ok(entries)
    }

    /// One render's worth of news; every failure collapses to `Unavailable`.
    pub async fn panel(&self) -> NewsPanel {
        self.fetch_latest().await.into()
    }

    pub fn parse_entries(
        xml_bytes: &[u8],
        limit: usize,
        placeholder_image: &str,
    ) -> Result<Vec<NewsEntry>, NewsError> {
        let parsed = parser::parse(xml_bytes)?;

        let entries: Vec<NewsEntry> = parsed
            .entries
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, entry)| Self::to_news_entry(i + 1, entry, placeholder_image))
            .collect();

        if entries.is_empty() {
            return Err(NewsError::Empty);
        }
        Ok(entries)
    }

    fn to_news_entry(rank: usize, entry: &Entry, placeholder_image: &str) -> NewsEntry {
        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.trim().to_string())
            .unwrap_or_else(|| "Untitled".to_string());

        let link = entry
            .links
            .first()
            .map(|l| l.href.clone())
            .unwrap_or_default();

        let image_url =
            Self::thumbnail_url(entry).unwrap_or_else(|| placeholder_image.to_string());

        let published: Option<DateTime<Utc>> = entry.published.or(entry.updated);

        NewsEntry {
            rank,
            title,
            link,
            image_url,
            published,
        }
    }

    /// First `media:thumbnail` URL, else first `media:content` URL.
    pub fn thumbnail_url(entry: &Entry) -> Option<String> {
        let thumbnail = entry
            .media
            .iter()
            .flat_map(|m| m.thumbnails.iter())
            .map(|t| t.image.uri.clone())
            .find(|uri| !uri.is_empty());

        thumbnail.or_else(|| {
            entry
                .media
                .iter()
                .flat_map(|m| m.content.iter())
                .find_map(|c| c.url.as_ref().map(|u| u.to_string()))
        })
    }
}
