//! https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-term-query.html

use crate::query_dsl::Query;
use serde_json::*;

/// Matches documents whose `field` contains exactly `value`.  Renders in the short
/// `{"term": {field: value}}` form unless `boost` or `query_name` are set.
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery {
    field: String,
    value: Value,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl TermQuery {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        TermQuery {
            field: field.into(),
            value: value.into(),
            boost: None,
            query_name: None,
        }
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

impl Query for TermQuery {
    fn source(&self) -> Value {
        let field = self.field.as_str();
        if self.boost.is_none() && self.query_name.is_none() {
            return json! {
                {
                    "term": { field: self.value }
                }
            };
        }

        let mut params = Map::new();
        params.insert("value".into(), self.value.clone());
        if let Some(boost) = self.boost {
            params.insert("boost".into(), json!(boost));
        }
        if let Some(query_name) = &self.query_name {
            params.insert("_name".into(), json!(query_name));
        }

        json! {
            {
                "term": { field: params }
            }
        }
    }
}
