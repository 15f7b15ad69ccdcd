use crate::error::{check_response, ElasticsearchError, Result};
use crate::options::ElasticsearchOptions;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;
use std::io::Read;
use std::time::Instant;
use tracing::{debug, warn};

mod count;
mod create_index;
mod delete_document;
mod delete_index;
mod flush_index;
mod get_document;
mod index_document;
mod index_exists;
mod refresh_index;
mod search;

pub use count::ElasticsearchCountRequest;
pub use create_index::ElasticsearchCreateIndexRequest;
pub use delete_document::{DeleteResponse, ElasticsearchDeleteDocumentRequest};
pub use delete_index::ElasticsearchDeleteIndexRequest;
pub use flush_index::ElasticsearchFlushRequest;
pub use get_document::{ElasticsearchGetDocumentRequest, GetResponse};
pub use index_document::{ElasticsearchIndexDocumentRequest, IndexResponse};
pub use index_exists::ElasticsearchIndexExistsRequest;
pub use refresh_index::ElasticsearchRefreshIndexRequest;
pub use search::{ElasticsearchSearchRequest, SearchHit, SearchHits, SearchResult, Shards};

/// A handle to an Elasticsearch cluster.  Cloning it is cheap and clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Elasticsearch {
    url: url::Url,
    agent: ureq::Agent,
    authorization: Option<Authorization>,
    options: ElasticsearchOptions,
}

/// A precomputed `authorization` header value that never shows up in `Debug` output
#[derive(Clone)]
struct Authorization(String);

impl Authorization {
    fn basic(username: &str, password: Option<&str>) -> Self {
        let credentials = format!("{}:{}", username, password.unwrap_or(""));
        Authorization(format!("Basic {}", BASE64.encode(credentials)))
    }
}

impl std::fmt::Debug for Authorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Basic ***")
    }
}

impl Elasticsearch {
    pub fn new(url: &str) -> Result<Self> {
        Elasticsearch::with_options(ElasticsearchOptions::new(url))
    }

    pub fn from_env() -> Result<Self> {
        Elasticsearch::with_options(ElasticsearchOptions::from_env()?)
    }

    pub fn with_options(options: ElasticsearchOptions) -> Result<Self> {
        let url = url::Url::parse(options.get_url())?;
        if url.cannot_be_a_base() {
            return Err(ElasticsearchError::Config(format!(
                "`{}` cannot be used as a base url",
                options.get_url()
            )));
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(ElasticsearchError::Config(
                "credentials belong in basic_auth, not in the url".to_string(),
            ));
        }

        // credentials travel in a header so request urls are safe to log
        let authorization = options
            .get_username()
            .map(|username| Authorization::basic(username, options.get_password()));

        let agent = Elasticsearch::agent_builder(&options)?.build();
        Ok(Elasticsearch {
            url,
            agent,
            authorization,
            options,
        })
    }

    fn agent_builder(options: &ElasticsearchOptions) -> Result<ureq::AgentBuilder> {
        let builder = ureq::AgentBuilder::new()
            .timeout(options.get_timeout())
            .user_agent(&format!("zdb-elastic/{}", crate::version()));

        #[cfg(feature = "native_tls")]
        let builder = builder.tls_connector(std::sync::Arc::new(
            native_tls::TlsConnector::new()
                .map_err(|e| ElasticsearchError::Config(e.to_string()))?,
        ));

        Ok(builder)
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }

    pub fn options(&self) -> &ElasticsearchOptions {
        &self.options
    }

    pub fn create_index(&self, index: &str) -> ElasticsearchCreateIndexRequest {
        ElasticsearchCreateIndexRequest::new(self, index)
    }

    pub fn delete_index(&self, index: &str) -> ElasticsearchDeleteIndexRequest {
        ElasticsearchDeleteIndexRequest::new(self, index)
    }

    pub fn index_exists(&self, index: &str) -> ElasticsearchIndexExistsRequest {
        ElasticsearchIndexExistsRequest::new(self, index)
    }

    pub fn refresh_index(&self, index: &str) -> ElasticsearchRefreshIndexRequest {
        ElasticsearchRefreshIndexRequest::new(self, index)
    }

    pub fn flush(&self) -> ElasticsearchFlushRequest {
        ElasticsearchFlushRequest::new(self)
    }

    pub fn index_document(&self, index: &str) -> ElasticsearchIndexDocumentRequest {
        ElasticsearchIndexDocumentRequest::new(self, index)
    }

    pub fn get_document<T: serde::de::DeserializeOwned>(
        &self,
        index: &str,
        id: &str,
    ) -> ElasticsearchGetDocumentRequest<T> {
        ElasticsearchGetDocumentRequest::new(self, index, id)
    }

    pub fn delete_document(
        &self,
        index: &str,
        type_: &str,
        id: &str,
    ) -> ElasticsearchDeleteDocumentRequest {
        ElasticsearchDeleteDocumentRequest::new(self, index, type_, id)
    }

    pub fn search(&self) -> ElasticsearchSearchRequest {
        ElasticsearchSearchRequest::new(self)
    }

    pub fn count(&self) -> ElasticsearchCountRequest {
        ElasticsearchCountRequest::new(self)
    }

    /// The cluster url with `segments` appended as percent-encoded path segments
    pub(crate) fn url_for(&self, segments: &[&str]) -> Result<url::Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ElasticsearchError::Config(format!("`{}` cannot be used as a base url", self.url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: &str, segments: &[&str]) -> Result<ureq::Request> {
        let request = self.agent.request_url(method, &self.url_for(segments)?);
        Ok(match &self.authorization {
            Some(Authorization(value)) => request.set("authorization", value),
            None => request,
        })
    }

    /// Like [`Elasticsearch::request`], but asks for a refresh when the client is
    /// configured to refresh after writes
    pub(crate) fn write_request(&self, method: &str, segments: &[&str]) -> Result<ureq::Request> {
        let request = self.request(method, segments)?;
        Ok(if self.options.get_refresh() {
            request.query("refresh", "true")
        } else {
            request
        })
    }

    pub(crate) fn execute_json_request<F, R>(
        request: ureq::Request,
        body: Option<Value>,
        response_parser: F,
    ) -> Result<R>
    where
        F: FnOnce(u16, String) -> Result<R>,
    {
        let body = match body {
            Some(body) => Some(serde_json::to_string(&body)?),
            None => None,
        };

        Elasticsearch::execute_request(
            request.set("content-type", "application/json"),
            body,
            response_parser,
        )
    }

    pub(crate) fn execute_request<F, R>(
        request: ureq::Request,
        body: Option<String>,
        response_parser: F,
    ) -> Result<R>
    where
        F: FnOnce(u16, String) -> Result<R>,
    {
        let method = request.method().to_string();
        let url = request.url().to_string();
        let start = Instant::now();

        let result = match &body {
            Some(body) => request.send_string(body),
            None => request.call(),
        };

        let response = match result {
            Ok(response) => response,

            // ureq considers 4xx and 5xx statuses errors, but we classify those ourselves
            Err(ureq::Error::Status(_, response)) => response,

            Err(ureq::Error::Transport(transport)) => {
                warn!(%method, %url, error = %transport, "elasticsearch request failed");
                return Err(ElasticsearchError::Transport(Box::new(transport)));
            }
        };

        let status = response.status();
        debug!(%method, %url, status, elapsed = ?start.elapsed(), "elasticsearch request");

        let mut reader = response.into_reader();
        if let Err(e) = check_response(status, Some(&mut reader)) {
            warn!(%method, %url, status, error = %e, "elasticsearch returned an error");
            return Err(e);
        }

        let mut body = String::new();
        reader.read_to_string(&mut body)?;
        response_parser(status, body)
    }
}

/// Joins names into a single comma-separated path segment
pub(crate) fn join_names(names: &[String]) -> String {
    names.join(",")
}
