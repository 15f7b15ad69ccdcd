use crate::elasticsearch::{join_names, Elasticsearch};
use crate::error::Result;

/// Flushes the named indices, or every index when none are named
pub struct ElasticsearchFlushRequest {
    elasticsearch: Elasticsearch,
    indices: Vec<String>,
    wait_if_ongoing: Option<bool>,
}

impl ElasticsearchFlushRequest {
    pub fn new(elasticsearch: &Elasticsearch) -> Self {
        ElasticsearchFlushRequest {
            elasticsearch: elasticsearch.clone(),
            indices: Vec::new(),
            wait_if_ongoing: None,
        }
    }

    pub fn index(mut self, index: &str) -> Self {
        self.indices.push(index.to_owned());
        self
    }

    pub fn wait_if_ongoing(mut self, wait: bool) -> Self {
        self.wait_if_ongoing = Some(wait);
        self
    }

    pub fn execute(&self) -> Result<()> {
        let indices = join_names(&self.indices);
        let mut request = if indices.is_empty() {
            self.elasticsearch.request("POST", &["_flush"])?
        } else {
            self.elasticsearch.request("POST", &[indices.as_str(), "_flush"])?
        };
        if let Some(wait) = self.wait_if_ongoing {
            request = request.query("wait_if_ongoing", if wait { "true" } else { "false" });
        }

        Elasticsearch::execute_request(request, None, |_, _| Ok(()))
    }
}
