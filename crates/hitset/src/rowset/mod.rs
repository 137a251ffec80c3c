mod error;
mod hits;
mod schema;


pub use error::RowSetError;
pub use hits::HitRowSet;
pub use schema::Schema;

use crate::{error::InternalError, value::Value};

///
/// RowSet
///
/// Forward-only cursor protocol over a flat row view. A fresh cursor sits
/// before the first row: consumers advance before the first read, and
/// `column` addresses the current row only.
///

pub trait RowSet {
    /// Column layout of every row.
    fn schema(&self) -> &Schema;

    /// Total row count, precomputed; constant for the life of the set.
    fn size(&self) -> usize;

    /// True iff the cursor is positioned on a row.
    fn has_current(&self) -> bool;

    /// Move to the next row. Returns true exactly `size()` times.
    fn advance(&mut self) -> bool;

    /// Rewind to before the first row; a fresh pass replays the same rows.
    fn reset(&mut self);

    /// Read one column of the current row.
    fn column(&self, index: usize) -> Result<Value, InternalError>;
}
