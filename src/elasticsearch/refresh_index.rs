use crate::elasticsearch::Elasticsearch;
use crate::error::{ElasticsearchError, Result};

pub struct ElasticsearchRefreshIndexRequest {
    elasticsearch: Elasticsearch,
    index: String,
}

impl ElasticsearchRefreshIndexRequest {
    pub fn new(elasticsearch: &Elasticsearch, index: &str) -> Self {
        ElasticsearchRefreshIndexRequest {
            elasticsearch: elasticsearch.clone(),
            index: index.to_owned(),
        }
    }

    pub fn execute(&self) -> Result<()> {
        if self.index.is_empty() {
            return Err(ElasticsearchError::MissingIndex);
        }

        Elasticsearch::execute_request(
            self.elasticsearch.request("POST", &[self.index.as_str(), "_refresh"])?,
            None,
            |_, _| Ok(()),
        )
    }
}
