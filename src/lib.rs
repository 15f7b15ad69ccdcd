//! A blocking Elasticsearch client.
//!
//! Requests are built from an [`Elasticsearch`] handle and sent with `execute()`.
//! Responses are classified by [`error::check_response`]: 2xx and 404 are handed
//! to the request's parser, anything else becomes an [`ElasticsearchError`].
//!
//! ```no_run
//! use zdb_elastic::query_dsl::MoreLikeThisQuery;
//! use zdb_elastic::Elasticsearch;
//!
//! # fn main() -> zdb_elastic::error::Result<()> {
//! let elasticsearch = Elasticsearch::new("http://localhost:9200/")?;
//! let result = elasticsearch
//!     .search()
//!     .index("twitter")
//!     .query(MoreLikeThisQuery::new("Golang topic.").field("message"))
//!     .execute()?;
//! println!("{} similar tweets", result.total_hits());
//! # Ok(())
//! # }
//! ```

pub mod elasticsearch;
pub mod error;
pub mod options;
pub mod query_dsl;

pub use elasticsearch::Elasticsearch;
pub use error::{ElasticsearchError, Result};
pub use options::ElasticsearchOptions;

#[allow(dead_code)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub fn version() -> &'static str {
    built_info::PKG_VERSION
}
