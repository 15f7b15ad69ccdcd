//! https://www.elastic.co/guide/en/elasticsearch/reference/1.7/query-dsl-mlt-query.html
//!
//! Finds documents that are "like" a given text or a set of reference documents.

use crate::query_dsl::{FetchSourceContext, Query};
use serde::*;
use serde_json::*;

/// A document referenced by a [`MoreLikeThisQuery`], either by its coordinates
/// or as an artificial document supplied inline with [`MoreLikeThisQueryItem::doc`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoreLikeThisQueryItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "_index", skip_serializing_if = "Option::is_none")]
    index: Option<String>,
    #[serde(rename = "_routing", skip_serializing_if = "Option::is_none")]
    routing: Option<String>,
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    fetch_source: Option<FetchSourceContext>,
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    type_: Option<String>,
    #[serde(rename = "_version", skip_serializing_if = "Option::is_none")]
    version: Option<i64>,
    #[serde(rename = "_version_type", skip_serializing_if = "Option::is_none")]
    version_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    doc: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<String>>,
}

impl MoreLikeThisQueryItem {
    pub fn new() -> Self {
        MoreLikeThisQueryItem::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    pub fn routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }

    /// An artificial document, not present in the index
    pub fn doc(mut self, doc: Value) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .get_or_insert_with(Vec::new)
            .extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn fetch_source_context(mut self, fetch_source: FetchSourceContext) -> Self {
        self.fetch_source = Some(fetch_source);
        self
    }

    pub fn version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    pub fn version_type(mut self, version_type: impl Into<String>) -> Self {
        self.version_type = Some(version_type.into());
        self
    }

    pub fn source(&self) -> Value {
        json!(self)
    }
}

/// Field order follows the key order Elasticsearch's own clients emit
#[derive(Serialize)]
struct MoreLikeThis<'a> {
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    query_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analyzer: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    boost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    boost_terms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    docs: Option<&'a [MoreLikeThisQueryItem]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fail_on_unsupported_field: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ids: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    like_text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_doc_freq: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_query_terms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_word_len: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_doc_freq: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_term_freq: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_word_len: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum_should_match: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_words: Option<&'a [String]>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoreLikeThisQuery {
    fields: Vec<String>,
    like_text: Option<String>,
    ids: Vec<String>,
    docs: Vec<MoreLikeThisQueryItem>,
    include: Option<bool>,
    minimum_should_match: Option<String>,
    min_term_freq: Option<i64>,
    max_query_terms: Option<i64>,
    stop_words: Vec<String>,
    min_doc_freq: Option<i64>,
    max_doc_freq: Option<i64>,
    min_word_len: Option<i64>,
    max_word_len: Option<i64>,
    boost_terms: Option<f64>,
    boost: Option<f64>,
    analyzer: Option<String>,
    fail_on_unsupported_field: Option<bool>,
    query_name: Option<String>,
}

impl MoreLikeThisQuery {
    /// An empty `like_text` means the query is driven by `ids` or `docs` instead
    pub fn new(like_text: &str) -> Self {
        MoreLikeThisQuery::default().like_text(like_text)
    }

    pub fn like_text(mut self, like_text: &str) -> Self {
        self.like_text = if like_text.is_empty() {
            None
        } else {
            Some(like_text.to_string())
        };
        self
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn stop_word(mut self, stop_word: impl Into<String>) -> Self {
        self.stop_words.push(stop_word.into());
        self
    }

    pub fn stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words
            .extend(stop_words.into_iter().map(Into::into));
        self
    }

    /// Ids of indexed documents to use as the "like" input.  Ignored once any
    /// [`MoreLikeThisQueryItem`] has been added with [`MoreLikeThisQuery::docs`].
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn docs<I>(mut self, docs: I) -> Self
    where
        I: IntoIterator<Item = MoreLikeThisQueryItem>,
    {
        self.docs.extend(docs);
        self
    }

    /// Whether the input documents are themselves returned.  Rendered as `exclude`.
    pub fn include(mut self, include: bool) -> Self {
        self.include = Some(include);
        self
    }

    pub fn minimum_should_match(mut self, minimum_should_match: impl Into<String>) -> Self {
        self.minimum_should_match = Some(minimum_should_match.into());
        self
    }

    pub fn min_term_freq(mut self, min_term_freq: i64) -> Self {
        self.min_term_freq = Some(min_term_freq);
        self
    }

    pub fn max_query_terms(mut self, max_query_terms: i64) -> Self {
        self.max_query_terms = Some(max_query_terms);
        self
    }

    pub fn min_doc_freq(mut self, min_doc_freq: i64) -> Self {
        self.min_doc_freq = Some(min_doc_freq);
        self
    }

    pub fn max_doc_freq(mut self, max_doc_freq: i64) -> Self {
        self.max_doc_freq = Some(max_doc_freq);
        self
    }

    pub fn min_word_len(mut self, min_word_len: i64) -> Self {
        self.min_word_len = Some(min_word_len);
        self
    }

    pub fn max_word_len(mut self, max_word_len: i64) -> Self {
        self.max_word_len = Some(max_word_len);
        self
    }

    pub fn boost_terms(mut self, boost_terms: f64) -> Self {
        self.boost_terms = Some(boost_terms);
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn fail_on_unsupported_field(mut self, fail: bool) -> Self {
        self.fail_on_unsupported_field = Some(fail);
        self
    }

    pub fn query_name(mut self, query_name: impl Into<String>) -> Self {
        self.query_name = Some(query_name.into());
        self
    }
}

fn non_empty<T>(slice: &[T]) -> Option<&[T]> {
    if slice.is_empty() {
        None
    } else {
        Some(slice)
    }
}

impl Query for MoreLikeThisQuery {
    fn source(&self) -> Value {
        let docs = non_empty(&self.docs);
        let ids = if docs.is_some() {
            None
        } else {
            non_empty(&self.ids)
        };

        let morelikethis = MoreLikeThis {
            query_name: self.query_name.as_deref(),
            analyzer: self.analyzer.as_deref(),
            boost: self.boost,
            boost_terms: self.boost_terms,
            docs,
            exclude: self.include.map(|include| !include),
            fail_on_unsupported_field: self.fail_on_unsupported_field,
            fields: non_empty(&self.fields),
            ids,
            like_text: self.like_text.as_deref(),
            max_doc_freq: self.max_doc_freq,
            max_query_terms: self.max_query_terms,
            max_word_len: self.max_word_len,
            min_doc_freq: self.min_doc_freq,
            min_term_freq: self.min_term_freq,
            min_word_len: self.min_word_len,
            minimum_should_match: self.minimum_should_match.as_deref(),
            stop_words: non_empty(&self.stop_words),
        };

        json! {
            {
                "mlt": morelikethis
            }
        }
    }
}
