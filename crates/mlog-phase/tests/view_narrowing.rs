mod common;

use std::sync::Arc;

use mlog_core::{ResourceKind, RowId};
use mlog_phase::{CandidateView, CombinationOption};
use proptest::prelude::*;

fn hammer_view() -> CandidateView {
    CandidateView::full(Arc::new(common::table(
        "Hammer",
        &["SleeveDiameter_m"],
        &[vec![2.0], vec![3.0], vec![2.5]],
    )))
}

#[test]
fn full_view_exposes_every_row_in_order() {
    let view = hammer_view();
    assert_eq!(view.len(), 3);
    assert_eq!(view.type_id().as_str(), "Hammer");
    let ids: Vec<_> = view.rows().map(|row| row.id().as_raw()).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn restrict_never_readmits_rows() {
    let mut view = hammer_view();
    assert_eq!(view.restrict(&[RowId::from_raw(1), RowId::from_raw(2)]), 1);
    assert_eq!(view.restrict(&[RowId::from_raw(0), RowId::from_raw(2)]), 1);
    assert_eq!(view.row_ids(), &[RowId::from_raw(2)]);
    assert!(!view.contains(RowId::from_raw(0)));
    assert_eq!(view.table().len(), 3);
}

#[test]
fn empty_roles_are_detected() {
    let mut empty = hammer_view();
    empty.restrict(&[]);
    let option = CombinationOption::new()
        .with_role(ResourceKind::Vessel, 1, hammer_view())
        .with_role(ResourceKind::Equipment, 1, empty);
    assert!(option.has_empty_role());
    assert_eq!(option.empty_role().map(|(kind, _)| kind), Some(ResourceKind::Equipment));
    assert_eq!(option.role_count(), 2);
}

proptest! {
    #[test]
    fn restrict_keeps_a_subset(keep in proptest::collection::vec(0u64..6, 0..6)) {
        let mut view = hammer_view();
        let before: Vec<_> = view.row_ids().to_vec();
        let keep: Vec<_> = keep.into_iter().map(RowId::from_raw).collect();
        let dropped = view.restrict(&keep);
        prop_assert_eq!(dropped + view.len(), before.len());
        for id in view.row_ids() {
            prop_assert!(before.contains(id));
            prop_assert!(keep.contains(id));
        }
    }
}
