use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Controls how the `_source` field is returned.  Disabled it renders as `false`,
/// otherwise as the include/exclude patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSourceContext {
    fetch_source: bool,
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl FetchSourceContext {
    pub fn new(fetch_source: bool) -> Self {
        FetchSourceContext {
            fetch_source,
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    pub fn fetch_source(&self) -> bool {
        self.fetch_source
    }

    pub fn include<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(includes.into_iter().map(Into::into));
        self
    }

    pub fn exclude<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(excludes.into_iter().map(Into::into));
        self
    }
}

impl Serialize for FetchSourceContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.fetch_source {
            return serializer.serialize_bool(false);
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("includes", &self.includes)?;
        map.serialize_entry("excludes", &self.excludes)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_disabled() {
        assert_eq!(
            serde_json::to_value(FetchSourceContext::new(false)).unwrap(),
            json!(false)
        );
    }

    #[test]
    fn test_includes_and_excludes() {
        let fsc = FetchSourceContext::new(true)
            .include(["user", "message"])
            .exclude(vec!["retweets".to_string()]);

        assert_eq!(
            serde_json::to_value(fsc).unwrap(),
            json! {
                {
                    "includes": ["user", "message"],
                    "excludes": ["retweets"]
                }
            }
        );
    }
}
