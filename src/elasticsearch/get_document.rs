use crate::elasticsearch::Elasticsearch;
use crate::error::{ElasticsearchError, Result};
use serde::Deserialize;
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetResponse<T> {
    #[serde(rename = "_index", default)]
    pub index: String,
    #[serde(rename = "_type", default)]
    pub type_: String,
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "_version")]
    pub version: Option<i64>,
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "_source")]
    pub source: Option<T>,
}

pub struct ElasticsearchGetDocumentRequest<T: serde::de::DeserializeOwned> {
    elasticsearch: Elasticsearch,
    index: String,
    type_: String,
    id: String,
    routing: Option<String>,
    realtime: Option<bool>,
    _marker: PhantomData<T>,
}

impl<T: serde::de::DeserializeOwned> ElasticsearchGetDocumentRequest<T> {
    pub fn new(elasticsearch: &Elasticsearch, index: &str, id: &str) -> Self {
        ElasticsearchGetDocumentRequest {
            elasticsearch: elasticsearch.clone(),
            index: index.to_owned(),
            type_: "_all".to_owned(),
            id: id.to_owned(),
            routing: None,
            realtime: None,
            _marker: PhantomData,
        }
    }

    pub fn type_(mut self, type_: &str) -> Self {
        self.type_ = type_.to_owned();
        self
    }

    pub fn routing(mut self, routing: &str) -> Self {
        self.routing = Some(routing.to_owned());
        self
    }

    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = Some(realtime);
        self
    }

    /// `Ok(None)` when the document doesn't exist
    pub fn execute(&self) -> Result<Option<GetResponse<T>>> {
        if self.index.is_empty() {
            return Err(ElasticsearchError::MissingIndex);
        }
        if self.type_.is_empty() {
            return Err(ElasticsearchError::MissingType);
        }
        if self.id.is_empty() {
            return Err(ElasticsearchError::MissingId);
        }

        let mut request = self.elasticsearch.request(
            "GET",
            &[self.index.as_str(), self.type_.as_str(), self.id.as_str()],
        )?;
        if let Some(routing) = &self.routing {
            request = request.query("routing", routing);
        }
        if let Some(realtime) = self.realtime {
            request = request.query("realtime", if realtime { "true" } else { "false" });
        }

        Elasticsearch::execute_request(request, None, |status, body| {
            if status == 404 {
                return Ok(None);
            }
            Ok(Some(serde_json::from_str::<GetResponse<T>>(&body)?))
        })
    }
}
