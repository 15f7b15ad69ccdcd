use crate::elasticsearch::{join_names, Elasticsearch};
use crate::error::Result;
use crate::query_dsl::Query;
use serde::*;
use serde_json::*;

pub struct ElasticsearchCountRequest {
    elasticsearch: Elasticsearch,
    indices: Vec<String>,
    query: Option<Value>,
}

impl ElasticsearchCountRequest {
    pub fn new(elasticsearch: &Elasticsearch) -> Self {
        ElasticsearchCountRequest {
            elasticsearch: elasticsearch.clone(),
            indices: Vec::new(),
            query: None,
        }
    }

    pub fn index(mut self, index: &str) -> Self {
        self.indices.push(index.to_owned());
        self
    }

    pub fn query(mut self, query: impl Query) -> Self {
        self.query = Some(query.source());
        self
    }

    pub fn execute(self) -> Result<u64> {
        let indices = join_names(&self.indices);
        let request = if indices.is_empty() {
            self.elasticsearch.request("POST", &["_count"])?
        } else {
            self.elasticsearch
                .request("POST", &[indices.as_str(), "_count"])?
        };

        let body = self.query.map(|query| {
            json! {
                {
                    "query": query
                }
            }
        });

        Elasticsearch::execute_json_request(request, body, |_, body| {
            #[derive(Deserialize)]
            struct Count {
                #[serde(default)]
                count: u64,
            }

            let count: Count = serde_json::from_str(&body)?;
            Ok(count.count)
        })
    }
}
