use crate::error::{ErrorClass, ErrorOrigin, InternalError};
use thiserror::Error as ThisError;

///
/// RowSetError
///
/// Row-set construction and read-protocol failures.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum RowSetError {
    /// More than one distinct nested path across the extractor list.
    #[error("multi-nested docs are not supported: [{}]", paths.join(", "))]
    MultipleNestedPaths { paths: Vec<String> },

    /// Schema width and extractor count must mirror each other.
    #[error("schema arity mismatch: {columns} columns for {extractors} extractors")]
    SchemaArityMismatch { columns: usize, extractors: usize },

    /// Column read without a current row (before first advance, or drained).
    #[error("no current row")]
    NoCurrentRow,

    /// Column index outside the extractor list.
    #[error("column index out of range: {index} (arity {arity})")]
    ColumnOutOfRange { index: usize, arity: usize },

    /// Odometer selected a nested position the hit does not have.
    #[error("nested index out of range under '{path}': {index} (len {len})")]
    NestedIndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
}

impl RowSetError {
    // Construct one multi-nested rejection naming every offending path.
    pub(in crate::rowset) fn multiple_nested_paths(paths: &[&str]) -> Self {
        Self::MultipleNestedPaths {
            paths: paths.iter().map(ToString::to_string).collect(),
        }
    }

    // Construct one schema/extractor arity mismatch error.
    pub(in crate::rowset) const fn schema_arity_mismatch(columns: usize, extractors: usize) -> Self {
        Self::SchemaArityMismatch {
            columns,
            extractors,
        }
    }

    // Construct one missing-current-row protocol error.
    pub(in crate::rowset) const fn no_current_row() -> Self {
        Self::NoCurrentRow
    }

    // Construct one out-of-range column index error.
    pub(in crate::rowset) const fn column_out_of_range(index: usize, arity: usize) -> Self {
        Self::ColumnOutOfRange { index, arity }
    }

    // Construct one nested resolution error for the active path.
    pub(in crate::rowset) fn nested_index_out_of_range(
        path: impl Into<String>,
        index: usize,
        len: usize,
    ) -> Self {
        Self::NestedIndexOutOfRange {
            path: path.into(),
            index,
            len,
        }
    }

    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::MultipleNestedPaths { .. } | Self::SchemaArityMismatch { .. } => {
                ErrorClass::Unsupported
            }
            Self::NoCurrentRow
            | Self::ColumnOutOfRange { .. }
            | Self::NestedIndexOutOfRange { .. } => ErrorClass::InvariantViolation,
        }
    }

    pub(crate) const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::NestedIndexOutOfRange { .. } => ErrorOrigin::Extract,
            _ => ErrorOrigin::RowSet,
        }
    }
}

impl From<RowSetError> for InternalError {
    fn from(err: RowSetError) -> Self {
        Self::new(err.class(), err.origin(), err.to_string())
    }
}

///
/// TESTS
///
