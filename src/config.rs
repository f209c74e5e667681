use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_FEED_URL: &str = "https://news.google.com/rss/search?\
q=maritime+anomaly+detection+coastal+security+AIS+satellite\
&hl=en-IN&gl=IN&ceid=IN:en";

pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6f/Ship_icon.svg/512px-Ship_icon.svg.png";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Directory served under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default)]
    pub news: NewsConfig,
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsConfig {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    /// Feed request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_max_entries() -> usize {
    10
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "MaritimeDashboard/1.0".to_string()
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            max_entries: default_max_entries(),
            placeholder_image: default_placeholder_image(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            static_dir: default_static_dir(),
            news: NewsConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.news.max_entries == 0 {
            anyhow::bail!("news.max_entries must be at least 1");
        }
        if self.news.feed_url.trim().is_empty() {
            anyhow::bail!("news.feed_url must not be empty");
        }
        Ok(())
    }
}
