use crate::{hit::Hit, value::Value};
use serde::{Deserialize, Serialize};

///
/// ColumnSource
///
/// What one column reads out of the hit it is handed.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum ColumnSource {
    /// The hit identity.
    DocId,
    /// Relevance score; Null when the backend supplied none.
    Score,
    /// Source-field lookup by name; Null when the field is missing.
    Field(String),
    /// Fixed value repeated on every row.
    Constant(Value),
}

impl ColumnSource {
    fn read(&self, hit: &Hit) -> Value {
        match self {
            Self::DocId => Value::Text(hit.id().to_string()),
            Self::Score => hit.score().map_or(Value::Null, Value::Float),
            Self::Field(name) => hit.field(name).cloned().unwrap_or(Value::Null),
            Self::Constant(value) => value.clone(),
        }
    }
}

///
/// HitExtractor
///
/// One column's extraction capability. A top-level extractor reads the
/// top-level document; a nested extractor reads a child document under
/// exactly one nested path. The row set resolves which hit to hand over,
/// so `extract` never walks nesting itself.
///
/// Extractors ride inside continuation tokens, so every variant is
/// serde-serializable.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum HitExtractor {
    TopLevel { source: ColumnSource },
    Nested { path: String, source: ColumnSource },
}

impl HitExtractor {
    #[must_use]
    pub const fn top_level(source: ColumnSource) -> Self {
        Self::TopLevel { source }
    }

    #[must_use]
    pub fn nested(path: impl Into<String>, source: ColumnSource) -> Self {
        Self::Nested {
            path: path.into(),
            source,
        }
    }

    /// Nested path this extractor reads from, if any.
    #[must_use]
    pub fn nested_path(&self) -> Option<&str> {
        match self {
            Self::TopLevel { .. } => None,
            Self::Nested { path, .. } => Some(path.as_str()),
        }
    }

    /// Read this column's value out of `hit`.
    #[must_use]
    pub fn extract(&self, hit: &Hit) -> Value {
        match self {
            Self::TopLevel { source } | Self::Nested { source, .. } => source.read(hit),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{ColumnSource, HitExtractor};
    use crate::{hit::Hit, value::Value};

    #[test]
    fn sources_read_identity_score_field_and_constant() {
        let hit = Hit::new("doc-9").with_score(1.25).with_field("state", "open");

        let id = HitExtractor::top_level(ColumnSource::DocId);
        let score = HitExtractor::top_level(ColumnSource::Score);
        let field = HitExtractor::top_level(ColumnSource::Field("state".to_string()));
        let constant = HitExtractor::top_level(ColumnSource::Constant(Value::Uint(42)));

        assert_eq!(id.extract(&hit), Value::Text("doc-9".to_string()));
        assert_eq!(score.extract(&hit), Value::Float(1.25));
        assert_eq!(field.extract(&hit), Value::Text("open".to_string()));
        assert_eq!(constant.extract(&hit), Value::Uint(42));
    }

    #[test]
    fn missing_score_and_field_read_as_null() {
        let hit = Hit::new("doc-10");

        let score = HitExtractor::top_level(ColumnSource::Score);
        let field = HitExtractor::top_level(ColumnSource::Field("state".to_string()));

        assert_eq!(score.extract(&hit), Value::Null);
        assert_eq!(field.extract(&hit), Value::Null);
    }

    #[test]
    fn nested_path_is_reported_only_for_nested_extractors() {
        let top = HitExtractor::top_level(ColumnSource::DocId);
        let nested = HitExtractor::nested("comments", ColumnSource::DocId);

        assert_eq!(top.nested_path(), None);
        assert_eq!(nested.nested_path(), Some("comments"));
    }

    #[test]
    fn extract_reads_the_hit_it_is_handed_regardless_of_variant() {
        let child = Hit::new("doc-11.c0").with_field("depth", 1_u64);
        let nested = HitExtractor::nested("comments", ColumnSource::Field("depth".to_string()));

        // Nesting resolution is the row set's job; handed a child directly,
        // the extractor just reads it.
        assert_eq!(nested.extract(&child), Value::Uint(1));
    }
}
