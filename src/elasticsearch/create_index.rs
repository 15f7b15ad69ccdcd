use crate::elasticsearch::Elasticsearch;
use crate::error::{ElasticsearchError, Result};
use serde_json::Value;

pub struct ElasticsearchCreateIndexRequest {
    elasticsearch: Elasticsearch,
    index: String,
    body: Option<Value>,
}

impl ElasticsearchCreateIndexRequest {
    pub fn new(elasticsearch: &Elasticsearch, index: &str) -> Self {
        ElasticsearchCreateIndexRequest {
            elasticsearch: elasticsearch.clone(),
            index: index.to_owned(),
            body: None,
        }
    }

    /// Index settings, mappings and aliases
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn execute(self) -> Result<()> {
        if self.index.is_empty() {
            return Err(ElasticsearchError::MissingIndex);
        }

        Elasticsearch::execute_json_request(
            self.elasticsearch.request("PUT", &[self.index.as_str()])?,
            self.body,
            |_, _| Ok(()),
        )
    }
}
