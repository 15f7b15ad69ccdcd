//! https://www.elastic.co/guide/en/elasticsearch/reference/1.7/query-dsl-ids-query.html

use crate::query_dsl::Query;
use serde::*;
use serde_json::*;

#[derive(Serialize)]
struct Ids<'a> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    types: Option<&'a [String]>,
    values: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    boost: Option<f64>,
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    query_name: Option<&'a str>,
}

/// Matches documents by `_id`, optionally restricted to some mapping types
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdsQuery {
    types: Vec<String>,
    values: Vec<String>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl IdsQuery {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IdsQuery {
            types: types.into_iter().map(Into::into).collect(),
            ..IdsQuery::default()
        }
    }

    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(ids.into_iter().map(Into::into));
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

impl Query for IdsQuery {
    fn source(&self) -> Value {
        let (type_, types) = match self.types.as_slice() {
            [] => (None, None),
            [only] => (Some(only.as_str()), None),
            many => (None, Some(many)),
        };

        let ids = Ids {
            type_,
            types,
            values: &self.values,
            boost: self.boost,
            query_name: self.query_name.as_deref(),
        };

        json! {
            {
                "ids": ids
            }
        }
    }
}
