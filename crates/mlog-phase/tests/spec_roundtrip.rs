mod common;

use std::io::Write;
use std::sync::Arc;

use mlog_catalog::OperationCatalog;
use mlog_core::{CombinationIndex, PhaseId, ResourceKind, VariantIndex};
use mlog_phase::{
    load_phase_specs, standard_om_specs, CandidateView, CombinationOption, PhaseBuilder, PhaseSpec,
};

#[test]
fn specs_survive_yaml_and_json_files() {
    let specs = standard_om_specs();

    let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    yaml.write_all(serde_yaml::to_string(&specs).unwrap().as_bytes())
        .unwrap();
    assert_eq!(load_phase_specs(yaml.path()).unwrap(), specs);

    let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    json.write_all(&serde_json::to_vec(&specs).unwrap()).unwrap();
    assert_eq!(load_phase_specs(json.path()).unwrap(), specs);
}

#[test]
fn role_weight_defaults_to_primary() {
    let yaml = r#"
id: 950
key: Custom
description: Custom inspection
variants:
  - id: 1
    label: Inspect
    operations: [op1, op_OM1, op8]
    combinations:
      - vessels:
          - type_id: CTV
"#;
    let spec: PhaseSpec = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(spec.id, PhaseId::from_raw(950));
    assert_eq!(spec.variants[0].combinations[0].vessels[0].weight, 1);
    let phase = spec.build(&OperationCatalog::standard(), &common::fleet()).unwrap();
    assert_eq!(phase.combination_count(), 1);
}

#[test]
fn builder_rejects_unknown_variants_and_empty_combinations() {
    let mut builder = PhaseBuilder::new(PhaseId::from_raw(1), "Test", "test phase");
    let variant = builder.variant(1, "Only", Vec::new());
    let view = CandidateView::full(Arc::new(common::table("CTV", &["Speed_kn"], &[vec![20.0]])));
    let vessel_role = |view: &CandidateView| {
        CombinationOption::new().with_role(ResourceKind::Vessel, 1, view.clone())
    };

    let err = builder
        .combination(VariantIndex::from_raw(7), vessel_role(&view))
        .unwrap_err();
    assert_eq!(err.code(), "unknown-variant");
    let err = builder.combination(variant, CombinationOption::new()).unwrap_err();
    assert_eq!(err.code(), "empty-combination");

    let first = builder.combination(variant, vessel_role(&view)).unwrap();
    assert_eq!(first, CombinationIndex::from_raw(0));

    let mut phase = builder.build();
    let target = phase.variant_mut(variant).unwrap();
    target.remove_combination(first);
    let next = target.push_combination(vessel_role(&view));
    assert_eq!(next, CombinationIndex::from_raw(1));
}
