use crate::elasticsearch::{join_names, Elasticsearch};
use crate::error::Result;
use crate::query_dsl::{FetchSourceContext, Query};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Shards {
    pub total: Option<u64>,
    pub successful: Option<u64>,
    pub skipped: Option<u64>,
    pub failed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_index")]
    pub index: Option<String>,

    #[serde(rename = "_type")]
    pub type_: Option<String>,

    #[serde(rename = "_id")]
    pub id: Option<String>,

    #[serde(rename = "_score")]
    pub score: Option<f64>,

    #[serde(rename = "_source")]
    pub source: Option<Value>,

    pub fields: Option<Value>,
    pub highlight: Option<Value>,
}

impl SearchHit {
    /// Deserializes `_source`, if the hit has one
    pub fn source_as<T: de::DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.source {
            Some(source) => Ok(Some(T::deserialize(source)?)),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHits {
    #[serde(default, deserialize_with = "deserialize_hits_total")]
    pub total: u64,
    pub max_score: Option<f64>,
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// Elasticsearch 7 reports `{"value": n, "relation": "eq"}` where older versions
/// report a plain number
fn deserialize_hits_total<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct HitsTotal {
        value: u64,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Total {
        Count(u64),
        Object(HitsTotal),
    }

    Ok(match Total::deserialize(deserializer)? {
        Total::Count(count) => count,
        Total::Object(total) => total.value,
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub took: Option<u64>,

    pub timed_out: Option<bool>,

    #[serde(rename = "_scroll_id")]
    pub scroll_id: Option<String>,

    #[serde(rename = "_shards")]
    pub shards: Option<Shards>,

    pub hits: Option<SearchHits>,
}

impl SearchResult {
    pub fn total_hits(&self) -> u64 {
        self.hits.as_ref().map_or(0, |hits| hits.total)
    }

    /// Deserializes every hit's `_source`, skipping hits without one
    pub fn each<T: de::DeserializeOwned>(&self) -> Result<Vec<T>> {
        let mut documents = Vec::new();
        for hit in self.hits.iter().flat_map(|hits| hits.hits.iter()) {
            if let Some(document) = hit.source_as()? {
                documents.push(document);
            }
        }
        Ok(documents)
    }
}

#[derive(Serialize)]
struct SearchBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
    #[serde(skip_serializing_if = "<[Value]>::is_empty")]
    sort: &'a [Value],
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    fetch_source: Option<&'a FetchSourceContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explain: Option<bool>,
}

pub struct ElasticsearchSearchRequest {
    elasticsearch: Elasticsearch,
    indices: Vec<String>,
    types: Vec<String>,
    query: Option<Value>,
    from: Option<u64>,
    size: Option<u64>,
    sort: Vec<Value>,
    fetch_source: Option<FetchSourceContext>,
    min_score: Option<f64>,
    explain: Option<bool>,
    pretty: bool,
}

impl ElasticsearchSearchRequest {
    pub fn new(elasticsearch: &Elasticsearch) -> Self {
        ElasticsearchSearchRequest {
            elasticsearch: elasticsearch.clone(),
            indices: Vec::new(),
            types: Vec::new(),
            query: None,
            from: None,
            size: None,
            sort: Vec::new(),
            fetch_source: None,
            min_score: None,
            explain: None,
            pretty: false,
        }
    }

    pub fn index(mut self, index: &str) -> Self {
        self.indices.push(index.to_owned());
        self
    }

    pub fn type_(mut self, type_: &str) -> Self {
        self.types.push(type_.to_owned());
        self
    }

    pub fn query(mut self, query: impl Query) -> Self {
        self.query = Some(query.source());
        self
    }

    pub fn from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort(mut self, field: &str, ascending: bool) -> Self {
        let order = if ascending { "asc" } else { "desc" };
        self.sort.push(json! {
            {
                field: { "order": order }
            }
        });
        self
    }

    pub fn fetch_source(mut self, fetch_source: bool) -> Self {
        self.fetch_source = Some(FetchSourceContext::new(fetch_source));
        self
    }

    pub fn fetch_source_context(mut self, fetch_source: FetchSourceContext) -> Self {
        self.fetch_source = Some(fetch_source);
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn explain(mut self, explain: bool) -> Self {
        self.explain = Some(explain);
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn body(&self) -> Value {
        json!(SearchBody {
            query: self.query.as_ref(),
            from: self.from,
            size: self.size,
            sort: &self.sort,
            fetch_source: self.fetch_source.as_ref(),
            min_score: self.min_score,
            explain: self.explain,
        })
    }

    pub fn execute(self) -> Result<SearchResult> {
        let indices = join_names(&self.indices);
        let types = join_names(&self.types);
        let mut segments = Vec::new();
        if !indices.is_empty() {
            segments.push(indices.as_str());
        } else if !types.is_empty() {
            segments.push("_all");
        }
        if !types.is_empty() {
            segments.push(types.as_str());
        }
        segments.push("_search");

        let mut request = self.elasticsearch.request("POST", &segments)?;
        if self.pretty {
            request = request.query("pretty", "true");
        }

        Elasticsearch::execute_json_request(request, Some(self.body()), |_, body| {
            Ok(serde_json::from_str::<SearchResult>(&body)?)
        })
    }
}
