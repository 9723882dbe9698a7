//! Narrowable candidate views over immutable resource tables.

use std::collections::BTreeSet;
use std::sync::Arc;

use mlog_catalog::{ResourceRow, ResourceTable, Schema};
use mlog_core::{ResourceTypeId, RowId};

/// Current candidate subset of one resource table.
///
/// The view shares its source table and only ever loses rows: [`restrict`]
/// intersects with the current subset, so a view is always a subset of the
/// table it was created from and never grows back within a run.
///
/// [`restrict`]: CandidateView::restrict
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateView {
    table: Arc<ResourceTable>,
    rows: Vec<RowId>,
}

impl CandidateView {
    /// Creates a view exposing every row of `table`.
    pub fn full(table: Arc<ResourceTable>) -> Self {
        let rows = table.rows().iter().map(ResourceRow::id).collect();
        Self { table, rows }
    }

    /// Returns the type whose table this view narrows.
    pub fn type_id(&self) -> &ResourceTypeId {
        self.table.type_id()
    }

    /// Returns the schema of the underlying table.
    pub fn schema(&self) -> &Schema {
        self.table.schema()
    }

    /// Returns the shared source table.
    pub fn table(&self) -> &Arc<ResourceTable> {
        &self.table
    }

    /// Returns the identifiers of the rows still in the view, in catalog order.
    pub fn row_ids(&self) -> &[RowId] {
        &self.rows
    }

    /// Iterates over the rows still in the view, in catalog order.
    pub fn rows(&self) -> impl Iterator<Item = &ResourceRow> + '_ {
        self.rows.iter().filter_map(|id| self.table.row(*id))
    }

    /// Returns true when `id` is still part of the view.
    pub fn contains(&self, id: RowId) -> bool {
        self.rows.contains(&id)
    }

    /// Returns the number of candidate rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when no candidate is left.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keeps only the rows listed in `keep`, returning how many were dropped.
    ///
    /// Identifiers outside the current view are ignored.
    pub fn restrict(&mut self, keep: &[RowId]) -> usize {
        let keep: BTreeSet<RowId> = keep.iter().copied().collect();
        let before = self.rows.len();
        self.rows.retain(|id| keep.contains(id));
        before - self.rows.len()
    }
}
