//! The threshold filter shared by role narrowing and port selection.

use mlog_catalog::{Attributed, Schema};
use mlog_core::errors::MlogError;
use mlog_core::RowId;
use mlog_phase::CandidateView;

use crate::requirement::Requirement;

/// Ensures every requirement targets a numeric column of `schema`.
pub fn check_requirements(
    schema: &Schema,
    owner: &str,
    requirements: &[Requirement],
) -> Result<(), MlogError> {
    requirements
        .iter()
        .try_for_each(|requirement| schema.require_numeric(owner, &requirement.attribute))
}

/// Applies `requirements` in order, keeping the records that pass each one.
///
/// The survivors keep their input order and each step only removes records,
/// so the result never outgrows its input.
pub fn filter_rows<'a, R, I>(records: I, requirements: &[Requirement]) -> Vec<&'a R>
where
    R: Attributed + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut survivors: Vec<&'a R> = records.into_iter().collect();
    for requirement in requirements {
        survivors.retain(|record| requirement.admits(*record));
    }
    survivors
}

/// Returns the rows of `view` that satisfy `requirements`, in view order.
pub fn narrow_view(view: &CandidateView, requirements: &[Requirement]) -> Vec<RowId> {
    filter_rows(view.rows(), requirements)
        .into_iter()
        .map(|row| row.id())
        .collect()
}
