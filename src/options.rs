use crate::error::{ElasticsearchError, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:9200/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for an [`crate::Elasticsearch`] client.
///
/// Can be deserialized from a configuration file (durations are humantime strings
/// such as `"30s"`) or read from the environment with [`ElasticsearchOptions::from_env`]:
///
/// - `ELASTICSEARCH_URL`
/// - `ELASTICSEARCH_TIMEOUT`
/// - `ELASTICSEARCH_USERNAME` / `ELASTICSEARCH_PASSWORD`
/// - `ELASTICSEARCH_REFRESH`
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElasticsearchOptions {
    #[serde(deserialize_with = "deserialize_url")]
    url: String,
    #[serde(deserialize_with = "deserialize_duration")]
    timeout: Duration,
    username: Option<String>,
    password: Option<String>,
    refresh: bool,
}

impl Default for ElasticsearchOptions {
    fn default() -> Self {
        ElasticsearchOptions {
            url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            username: None,
            password: None,
            refresh: false,
        }
    }
}

impl fmt::Debug for ElasticsearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElasticsearchOptions")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("refresh", &self.refresh)
            .finish()
    }
}

impl ElasticsearchOptions {
    pub fn new(url: &str) -> Self {
        ElasticsearchOptions::default().url(url)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut options = ElasticsearchOptions::default();

        if let Some(url) = lookup("ELASTICSEARCH_URL") {
            options = options.url(&url);
        }
        if let Some(timeout) = lookup("ELASTICSEARCH_TIMEOUT") {
            options.timeout = humantime::parse_duration(&timeout).map_err(|e| {
                ElasticsearchError::Config(format!("ELASTICSEARCH_TIMEOUT `{}`: {}", timeout, e))
            })?;
        }
        options.username = lookup("ELASTICSEARCH_USERNAME");
        options.password = lookup("ELASTICSEARCH_PASSWORD");
        if let Some(refresh) = lookup("ELASTICSEARCH_REFRESH") {
            options.refresh = refresh.parse().map_err(|_| {
                ElasticsearchError::Config(format!(
                    "ELASTICSEARCH_REFRESH `{}`: expected `true` or `false`",
                    refresh
                ))
            })?;
        }

        Ok(options)
    }

    /// The cluster url.  It always ends with a forward slash.
    pub fn url(mut self, url: &str) -> Self {
        self.url = with_trailing_slash(url);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn basic_auth(mut self, username: &str, password: Option<&str>) -> Self {
        self.username = Some(username.to_string());
        self.password = password.map(str::to_string);
        self
    }

    /// Ask Elasticsearch to refresh affected shards after every write
    pub fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn get_url(&self) -> &str {
        &self.url
    }

    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn get_username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn get_password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn get_refresh(&self) -> bool {
        self.refresh
    }
}

fn with_trailing_slash(url: &str) -> String {
    let mut url = url.trim().to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn deserialize_url<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(with_trailing_slash(&String::deserialize(deserializer)?))
}

fn deserialize_duration<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    humantime::parse_duration(&value).map_err(serde::de::Error::custom)
}
