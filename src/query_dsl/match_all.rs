//! https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-match-all-query.html
//!
//! The most simple query, which matches all documents, giving them all a _score of 1.0

use crate::query_dsl::Query;
use serde::*;
use serde_json::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchAllQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    boost: Option<f64>,
}

impl MatchAllQuery {
    pub fn new() -> Self {
        MatchAllQuery::default()
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Query for MatchAllQuery {
    fn source(&self) -> Value {
        json! {
            {
                "match_all": self
            }
        }
    }
}
