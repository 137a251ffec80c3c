use crate::{
    continuation::ContinuationCursor,
    error::InternalError,
    extract::HitExtractor,
    hit::Hit,
    obs::sink::{self, MetricsEvent},
    rowset::{RowSet, RowSetError, Schema},
    value::Value,
};

///
/// RowSetState
///
/// Read-protocol lifecycle. A fresh or reset row set is Pending and sits
/// before row zero; the first successful advance activates it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RowSetState {
    Pending,
    Active,
    Drained,
}

///
/// HitRowSet
///
/// Flat row view over one batch of hits. Without nested extractors every
/// top-level hit is one row. With a nested extractor present the odometer
/// runs two levels (top-level index, nested index): every child under the
/// active path is one row and childless parents contribute none.
///

#[derive(Clone, Debug)]
pub struct HitRowSet {
    schema: Schema,
    extractors: Vec<HitExtractor>,
    hits: Vec<Hit>,
    continuation_id: Option<String>,
    nested_path: Option<String>,
    index_per_level: Vec<usize>,
    row: usize,
    size: usize,
    state: RowSetState,
}

impl HitRowSet {
    /// Build a row set over one batch.
    ///
    /// `limit` clamps the precomputed row count; `None` means unlimited.
    /// `continuation_id` is the backend handle for the next batch, absent
    /// when the backend exhausted the result in this page.
    pub fn new(
        schema: Schema,
        extractors: Vec<HitExtractor>,
        hits: Vec<Hit>,
        limit: Option<usize>,
        continuation_id: Option<String>,
    ) -> Result<Self, RowSetError> {
        if schema.arity() != extractors.len() {
            sink::record(MetricsEvent::ConfigRejected);
            return Err(RowSetError::schema_arity_mismatch(
                schema.arity(),
                extractors.len(),
            ));
        }

        let nested_path = match distinct_nested_paths(&extractors).as_slice() {
            [] => None,
            [path] => Some((*path).to_string()),
            paths => {
                sink::record(MetricsEvent::ConfigRejected);
                return Err(RowSetError::multiple_nested_paths(paths));
            }
        };

        let raw_size = match nested_path.as_deref() {
            None => hits.len(),
            Some(path) => hits.iter().map(|hit| hit.nested_hits(path).len()).sum(),
        };
        let size = limit.map_or(raw_size, |limit| raw_size.min(limit));
        let levels = if nested_path.is_some() {
            crate::MAX_NESTED_LEVELS
        } else {
            1
        };

        sink::record(MetricsEvent::RowSetBuilt);

        Ok(Self {
            schema,
            extractors,
            hits,
            continuation_id,
            nested_path,
            index_per_level: vec![0; levels],
            row: 0,
            size,
            state: RowSetState::Pending,
        })
    }

    /// Zero-row, no-continuation row set over the given column layout.
    pub fn empty(schema: Schema, extractors: Vec<HitExtractor>) -> Result<Self, RowSetError> {
        Self::new(schema, extractors, Vec::new(), None, None)
    }

    #[must_use]
    pub const fn hits(&self) -> &[Hit] {
        self.hits.as_slice()
    }

    #[must_use]
    pub const fn extractors(&self) -> &[HitExtractor] {
        self.extractors.as_slice()
    }

    /// The single nested path in play, when any extractor reads one.
    #[must_use]
    pub fn nested_path(&self) -> Option<&str> {
        self.nested_path.as_deref()
    }

    #[must_use]
    pub fn continuation_id(&self) -> Option<&str> {
        self.continuation_id.as_deref()
    }

    /// Handle for fetching the next page, if the backend left one open.
    ///
    /// The backend can omit the continuation id when the whole result fit
    /// in this page; an empty batch likewise ends the handoff.
    #[must_use]
    pub fn next_page_cursor(&self) -> Option<ContinuationCursor> {
        match &self.continuation_id {
            Some(id) if !self.hits.is_empty() => {
                sink::record(MetricsEvent::PageContinued);
                Some(ContinuationCursor::new(id.clone(), self.extractors.clone()))
            }
            _ => {
                sink::record(MetricsEvent::PageTerminal);
                None
            }
        }
    }

    // Resolve the hit the extractor reads on the current row: the selected
    // top-level hit, or the selected child under the active nested path.
    fn current_hit_for(&self, extractor: &HitExtractor) -> Result<&Hit, InternalError> {
        // Level-0 position is in range whenever state is Active; the row
        // guard in advance() keeps it inside the precomputed size.
        let top = &self.hits[self.index_per_level[0]];

        match extractor.nested_path() {
            None => Ok(top),
            Some(path) => {
                let children = top.nested_hits(path);
                let child_index = self.index_per_level[1];
                match children.get(child_index) {
                    Some(child) => Ok(child),
                    None => Err(RowSetError::nested_index_out_of_range(
                        path,
                        child_index,
                        children.len(),
                    )
                    .into()),
                }
            }
        }
    }

    // Re-derive level bounds from the top and resolve carries until every
    // level is in range. A level at its bound resets, carries into its
    // parent, and restarts the scan so the new parent re-selects the child
    // array underneath it. Terminates because the row guard in advance()
    // only admits positions the precomputed size accounts for.
    fn normalize_odometer(&mut self) {
        let Some(path) = self.nested_path.as_deref() else {
            // One level: the row guard is the only bound.
            return;
        };

        let hits = &self.hits;
        let index = &mut self.index_per_level;

        let mut lvl = 0;
        while lvl < index.len() {
            let bound = if lvl == 0 {
                hits.len()
            } else {
                hits[index[lvl - 1]].nested_hits(path).len()
            };

            if index[lvl] == bound {
                // A top-level carry means the size accounting is broken.
                assert!(lvl > 0, "odometer overflow past the top level");
                index[lvl] = 0;
                index[lvl - 1] += 1;
                lvl = 0;
                continue;
            }

            lvl += 1;
        }
    }
}

impl RowSet for HitRowSet {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn size(&self) -> usize {
        self.size
    }

    fn has_current(&self) -> bool {
        self.state == RowSetState::Active
    }

    fn advance(&mut self) -> bool {
        match self.state {
            RowSetState::Drained => false,
            RowSetState::Pending => {
                if self.size == 0 {
                    self.state = RowSetState::Drained;
                    return false;
                }
                // Settle the all-zero odometer onto the first contributing
                // parent; leading childless hits carry straight over.
                self.normalize_odometer();
                self.state = RowSetState::Active;
                sink::record(MetricsEvent::RowAdvanced);
                true
            }
            RowSetState::Active => {
                if self.row + 1 < self.size {
                    self.row += 1;
                    // Bump the deepest level first; carries propagate up.
                    let deepest = self.index_per_level.len() - 1;
                    self.index_per_level[deepest] += 1;
                    self.normalize_odometer();
                    sink::record(MetricsEvent::RowAdvanced);
                    true
                } else {
                    self.state = RowSetState::Drained;
                    false
                }
            }
        }
    }

    fn reset(&mut self) {
        self.row = 0;
        self.index_per_level.fill(0);
        self.state = RowSetState::Pending;
        sink::record(MetricsEvent::RowSetReset);
    }

    fn column(&self, index: usize) -> Result<Value, InternalError> {
        if self.state != RowSetState::Active {
            return Err(RowSetError::no_current_row().into());
        }

        let Some(extractor) = self.extractors.get(index) else {
            return Err(RowSetError::column_out_of_range(index, self.extractors.len()).into());
        };

        let hit = self.current_hit_for(extractor)?;
        sink::record(MetricsEvent::ColumnRead);

        Ok(extractor.extract(hit))
    }
}

// Distinct nested paths across the extractor list, in first-reference order.
fn distinct_nested_paths(extractors: &[HitExtractor]) -> Vec<&str> {
    let mut paths: Vec<&str> = Vec::new();
    for extractor in extractors {
        if let Some(path) = extractor.nested_path()
            && !paths.contains(&path)
        {
            paths.push(path);
        }
    }
    paths
}
