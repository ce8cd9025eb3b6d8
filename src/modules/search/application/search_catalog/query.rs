/// A search request as it arrived: the raw query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Query string with its leading `?`, or empty when there was none
    pub raw_query: String,
}

impl SearchRequest {
    pub fn new(raw_query: impl Into<String>) -> Self {
        Self {
            raw_query: raw_query.into(),
        }
    }

    /// Build from a query string without its `?`, as HTTP frameworks hand it over
    pub fn from_uri_query(query: Option<&str>) -> Self {
        match query.filter(|q| !q.is_empty()) {
            Some(q) => Self::new(format!("?{}", q)),
            None => Self::default(),
        }
    }
}
