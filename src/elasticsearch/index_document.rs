use crate::elasticsearch::Elasticsearch;
use crate::error::{ElasticsearchError, Result};
use serde::*;
use serde_json::*;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndexResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub type_: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version")]
    pub version: Option<i64>,
    pub created: Option<bool>,
    pub result: Option<String>,
}

/// Adds or replaces a document.  Without an id, Elasticsearch generates one.
pub struct ElasticsearchIndexDocumentRequest {
    elasticsearch: Elasticsearch,
    index: String,
    type_: Option<String>,
    id: Option<String>,
    routing: Option<String>,
    body: Value,
}

impl ElasticsearchIndexDocumentRequest {
    pub fn new(elasticsearch: &Elasticsearch, index: &str) -> Self {
        ElasticsearchIndexDocumentRequest {
            elasticsearch: elasticsearch.clone(),
            index: index.to_owned(),
            type_: None,
            id: None,
            routing: None,
            body: json!({}),
        }
    }

    pub fn type_(mut self, type_: &str) -> Self {
        self.type_ = Some(type_.to_owned());
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    pub fn routing(mut self, routing: &str) -> Self {
        self.routing = Some(routing.to_owned());
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn body_json<T: Serialize>(self, doc: &T) -> Result<Self> {
        Ok(self.body(serde_json::to_value(doc)?))
    }

    pub fn execute(self) -> Result<IndexResponse> {
        if self.index.is_empty() {
            return Err(ElasticsearchError::MissingIndex);
        }
        let type_ = match self.type_.as_deref() {
            Some(type_) if !type_.is_empty() => type_,
            _ => return Err(ElasticsearchError::MissingType),
        };

        let mut request = match self.id.as_deref() {
            Some(id) if !id.is_empty() => self
                .elasticsearch
                .write_request("PUT", &[self.index.as_str(), type_, id])?,
            _ => self
                .elasticsearch
                .write_request("POST", &[self.index.as_str(), type_])?,
        };
        if let Some(routing) = &self.routing {
            request = request.query("routing", routing);
        }

        Elasticsearch::execute_json_request(request, Some(self.body), |_, body| {
            Ok(serde_json::from_str::<IndexResponse>(&body)?)
        })
    }
}
