//! https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-terms-query.html

use crate::query_dsl::Query;
use serde_json::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TermsQuery {
    field: String,
    values: Vec<Value>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl TermsQuery {
    pub fn new<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        TermsQuery {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
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

impl Query for TermsQuery {
    fn source(&self) -> Value {
        let mut params = Map::new();
        params.insert(self.field.clone(), Value::Array(self.values.clone()));
        if let Some(boost) = self.boost {
            params.insert("boost".into(), json!(boost));
        }
        if let Some(query_name) = &self.query_name {
            params.insert("_name".into(), json!(query_name));
        }

        json! {
            {
                "terms": params
            }
        }
    }
}
