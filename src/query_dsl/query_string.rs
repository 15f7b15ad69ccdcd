//! https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-query-string-query.html

use crate::query_dsl::Query;
use serde::*;
use serde_json::*;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QueryStringDefaultOperator {
    and,
    or,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryStringQuery {
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_operator: Option<QueryStringDefaultOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_leading_wildcard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lenient: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    boost: Option<f64>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    query_name: Option<String>,
}

impl QueryStringQuery {
    pub fn new(query: impl Into<String>) -> Self {
        QueryStringQuery {
            query: query.into(),
            default_field: None,
            default_operator: None,
            analyzer: None,
            allow_leading_wildcard: None,
            lenient: None,
            boost: None,
            query_name: None,
        }
    }

    pub fn default_field(mut self, default_field: impl Into<String>) -> Self {
        self.default_field = Some(default_field.into());
        self
    }

    pub fn default_operator(mut self, default_operator: QueryStringDefaultOperator) -> Self {
        self.default_operator = Some(default_operator);
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn allow_leading_wildcard(mut self, allow: bool) -> Self {
        self.allow_leading_wildcard = Some(allow);
        self
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
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

impl Query for QueryStringQuery {
    fn source(&self) -> Value {
        json! {
            {
                "query_string": self
            }
        }
    }
}
