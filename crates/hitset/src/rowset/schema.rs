use serde::{Deserialize, Serialize};

///
/// Schema
///
/// Ordered column names for one row set. Positions mirror the extractor
/// list one to one; the row set enforces matching arity at construction.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    #[must_use]
    pub const fn columns(&self) -> &[String] {
        self.columns.as_slice()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Schema;

    #[test]
    fn columns_keep_declaration_order() {
        let schema = Schema::new(["id", "state", "depth"]);

        assert_eq!(schema.arity(), 3);
        assert_eq!(schema.column_name(0), Some("id"));
        assert_eq!(schema.column_name(2), Some("depth"));
        assert_eq!(schema.column_name(3), None);
    }
}
