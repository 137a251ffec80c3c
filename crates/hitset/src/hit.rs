use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Hit
///
/// One document returned by the search backend. `source` holds the scalar
/// fields of the document; `nested` holds ordered child documents keyed by
/// nested path. Both maps may be empty.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Hit {
    id: String,
    score: Option<f64>,
    source: BTreeMap<String, Value>,
    nested: BTreeMap<String, Vec<Hit>>,
}

impl Hit {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            score: None,
            source: BTreeMap::new(),
            nested: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.source.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_nested(mut self, path: impl Into<String>, hits: Vec<Self>) -> Self {
        self.nested.insert(path.into(), hits);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn score(&self) -> Option<f64> {
        self.score
    }

    /// Look up one source field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.source.get(name)
    }

    /// Ordered child hits under `path`; a path the hit does not carry reads
    /// as an empty slice.
    #[must_use]
    pub fn nested_hits(&self, path: &str) -> &[Self] {
        self.nested.get(path).map_or(&[], Vec::as_slice)
    }
}

///
/// TESTS
///
