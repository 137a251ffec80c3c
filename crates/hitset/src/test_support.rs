use crate::{
    extract::{ColumnSource, HitExtractor},
    hit::Hit,
    rowset::Schema,
};

/// One top-level id column paired with a matching one-column schema.
pub(crate) fn id_layout() -> (Schema, Vec<HitExtractor>) {
    (
        Schema::new(["id"]),
        vec![HitExtractor::top_level(ColumnSource::DocId)],
    )
}

/// One nested id column reading under `path`.
pub(crate) fn nested_id_layout(path: &str) -> (Schema, Vec<HitExtractor>) {
    (
        Schema::new(["id"]),
        vec![HitExtractor::nested(path, ColumnSource::DocId)],
    )
}

/// Flat batch of `n` hits with ids `doc-0 .. doc-{n-1}`.
pub(crate) fn flat_hits(n: usize) -> Vec<Hit> {
    (0..n).map(|i| Hit::new(format!("doc-{i}"))).collect()
}

/// One parent per entry in `children_per_hit`, carrying that many children
/// under `path`. Children are ids `doc-<p>.c<i>`; a zero entry produces a
/// parent with no inner hits recorded at all.
pub(crate) fn nested_hits(path: &str, children_per_hit: &[usize]) -> Vec<Hit> {
    children_per_hit
        .iter()
        .enumerate()
        .map(|(p, &count)| {
            let parent = Hit::new(format!("doc-{p}"));
            if count == 0 {
                parent
            } else {
                let children = (0..count)
                    .map(|i| Hit::new(format!("doc-{p}.c{i}")))
                    .collect();
                parent.with_nested(path, children)
            }
        })
        .collect()
}
