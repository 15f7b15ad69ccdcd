//! https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-bool-query.html
//!
//! Clauses are rendered when they are added, so a `BoolQuery` can mix any
//! [`Query`] implementations.

use crate::query_dsl::Query;
use serde::*;
use serde_json::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoolQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    must: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    must_not: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    should: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    filter: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum_should_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    boost: Option<f64>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    query_name: Option<String>,
}

impl BoolQuery {
    pub fn new() -> Self {
        BoolQuery::default()
    }

    pub fn must(mut self, query: impl Query) -> Self {
        self.must.push(query.source());
        self
    }

    pub fn must_not(mut self, query: impl Query) -> Self {
        self.must_not.push(query.source());
        self
    }

    pub fn should(mut self, query: impl Query) -> Self {
        self.should.push(query.source());
        self
    }

    pub fn filter(mut self, query: impl Query) -> Self {
        self.filter.push(query.source());
        self
    }

    pub fn minimum_should_match(mut self, minimum_should_match: impl Into<String>) -> Self {
        self.minimum_should_match = Some(minimum_should_match.into());
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn query_name(mut self, query_name: impl Into<String>) -> Self {
        self.query_name = Some(query_name.into());
        self
    }
}

impl Query for BoolQuery {
    fn source(&self) -> Value {
        json! {
            {
                "bool": self
            }
        }
    }
}
