use crate::elasticsearch::Elasticsearch;
use crate::error::{ElasticsearchError, Result};

pub struct ElasticsearchDeleteIndexRequest {
    elasticsearch: Elasticsearch,
    index: String,
}

impl ElasticsearchDeleteIndexRequest {
    pub fn new(elasticsearch: &Elasticsearch, index: &str) -> Self {
        ElasticsearchDeleteIndexRequest {
            elasticsearch: elasticsearch.clone(),
            index: index.to_owned(),
        }
    }

    /// Deleting an index that doesn't exist is not an error
    pub fn execute(&self) -> Result<()> {
        if self.index.is_empty() {
            return Err(ElasticsearchError::MissingIndex);
        }

        Elasticsearch::execute_request(
            self.elasticsearch.request("DELETE", &[self.index.as_str()])?,
            None,
            |_, _| Ok(()),
        )
    }
}
