//! Flat row cursors over nested search hits: extraction capabilities, the
//! odometer row set, and the continuation handoff protocol exported via the
//! `prelude`.
#![warn(unreachable_pub)]

pub mod codec;
pub mod continuation;
pub mod error;
pub mod extract;
pub mod hit;
pub mod obs;
pub mod rowset;
pub mod serialize;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Deepest supported nesting: the top-level document plus one nested path.
///
/// More than one simultaneous nested path fails row-set construction, so
/// the odometer never runs more levels than this.
pub const MAX_NESTED_LEVELS: usize = 2;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        continuation::ContinuationCursor,
        extract::{ColumnSource, HitExtractor},
        hit::Hit,
        rowset::{HitRowSet, RowSet, Schema},
        value::Value,
    };
}
