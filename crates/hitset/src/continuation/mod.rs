mod token;

pub use token::TokenWireError;

use crate::extract::HitExtractor;

///
/// ContinuationCursor
///
/// Opaque handle pairing the backend continuation id with the extractor
/// list it was built for. The fetch layer exchanges it for the next batch
/// and builds a fresh row set with the same extractors.
/// Created once per page transition, consumed once, never mutated.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ContinuationCursor {
    continuation_id: String,
    extractors: Vec<HitExtractor>,
}

impl ContinuationCursor {
    #[must_use]
    pub fn new(continuation_id: impl Into<String>, extractors: Vec<HitExtractor>) -> Self {
        Self {
            continuation_id: continuation_id.into(),
            extractors,
        }
    }

    #[must_use]
    pub fn continuation_id(&self) -> &str {
        &self.continuation_id
    }

    #[must_use]
    pub const fn extractors(&self) -> &[HitExtractor] {
        self.extractors.as_slice()
    }

    /// Split into the continuation id and the extractor list.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<HitExtractor>) {
        (self.continuation_id, self.extractors)
    }
}

///
/// TESTS
///
