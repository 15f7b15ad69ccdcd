use crate::elasticsearch::Elasticsearch;
use crate::error::{ElasticsearchError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeleteResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub type_: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version")]
    pub version: Option<i64>,
    pub found: bool,
    pub result: Option<String>,
}

pub struct ElasticsearchDeleteDocumentRequest {
    elasticsearch: Elasticsearch,
    index: String,
    type_: String,
    id: String,
    routing: Option<String>,
}

impl ElasticsearchDeleteDocumentRequest {
    pub fn new(elasticsearch: &Elasticsearch, index: &str, type_: &str, id: &str) -> Self {
        ElasticsearchDeleteDocumentRequest {
            elasticsearch: elasticsearch.clone(),
            index: index.to_owned(),
            type_: type_.to_owned(),
            id: id.to_owned(),
            routing: None,
        }
    }

    pub fn routing(mut self, routing: &str) -> Self {
        self.routing = Some(routing.to_owned());
        self
    }

    /// A document that doesn't exist comes back with `found: false`
    pub fn execute(&self) -> Result<DeleteResponse> {
        if self.index.is_empty() {
            return Err(ElasticsearchError::MissingIndex);
        }
        if self.type_.is_empty() {
            return Err(ElasticsearchError::MissingType);
        }
        if self.id.is_empty() {
            return Err(ElasticsearchError::MissingId);
        }

        let mut request = self.elasticsearch.write_request(
            "DELETE",
            &[self.index.as_str(), self.type_.as_str(), self.id.as_str()],
        )?;
        if let Some(routing) = &self.routing {
            request = request.query("routing", routing);
        }

        Elasticsearch::execute_request(request, None, |_, body| {
            Ok(serde_json::from_str::<DeleteResponse>(&body)?)
        })
    }
}
