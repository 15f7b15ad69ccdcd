use crate::elasticsearch::Elasticsearch;
use crate::error::{ElasticsearchError, Result};

pub struct ElasticsearchIndexExistsRequest {
    elasticsearch: Elasticsearch,
    index: String,
}

impl ElasticsearchIndexExistsRequest {
    pub fn new(elasticsearch: &Elasticsearch, index: &str) -> Self {
        ElasticsearchIndexExistsRequest {
            elasticsearch: elasticsearch.clone(),
            index: index.to_owned(),
        }
    }

    pub fn execute(&self) -> Result<bool> {
        if self.index.is_empty() {
            return Err(ElasticsearchError::MissingIndex);
        }

        Elasticsearch::execute_request(
            self.elasticsearch.request("HEAD", &[self.index.as_str()])?,
            None,
            |status, _| Ok(status != 404),
        )
    }
}
