//! Builders for Elasticsearch's query DSL.
//!
//! Every builder only renders the options that were explicitly set, so a setter
//! called with a type's zero value (`0`, `false`, `""`) still shows up in the
//! generated JSON.

use serde_json::Value;

pub mod bool;
pub mod fetch_source;
pub mod ids;
pub mod match_all;
pub mod more_like_this;
pub mod query_string;
pub mod term;
pub mod terms;

pub use self::bool::BoolQuery;
pub use fetch_source::FetchSourceContext;
pub use ids::IdsQuery;
pub use match_all::MatchAllQuery;
pub use more_like_this::{MoreLikeThisQuery, MoreLikeThisQueryItem};
pub use query_string::{QueryStringDefaultOperator, QueryStringQuery};
pub use term::TermQuery;
pub use terms::TermsQuery;

/// Something that renders into a query DSL clause
pub trait Query {
    fn source(&self) -> Value;
}

impl<Q: Query + ?Sized> Query for &Q {
    fn source(&self) -> Value {
        (**self).source()
    }
}

impl<Q: Query + ?Sized> Query for Box<Q> {
    fn source(&self) -> Value {
        (**self).source()
    }
}

/// Hand-written query DSL is passed through as-is
impl Query for Value {
    fn source(&self) -> Value {
        self.clone()
    }
}
