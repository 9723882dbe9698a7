mod common;

use std::io::Write;

use mlog_catalog::{PortCatalog, PortRecord, Schema, LOAD_BEARING, TERMINAL_AREA};
use mlog_core::{ResourceKind, VariantIndex};
use mlog_select::{
    load_run_config, om_port_requirements, run_phase, BasePortPolicy, Comparator, Requirement,
    RequirementSet, RunConfig, SelectionNote, SparePartCargo, VariantState, INFEASIBLE_MESSAGE,
};

use common::type_id;

#[test]
fn config_defaults_fill_missing_fields() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(b"phase: F_driven\n").unwrap();

    let config = load_run_config(file.path()).unwrap();

    assert_eq!(config, RunConfig::new("F_driven"));
    assert_eq!(config.order, vec![ResourceKind::Equipment, ResourceKind::Vessel]);
    assert!(config.resolve);
    assert_eq!(config.base_port, BasePortPolicy::FirstFeasible);
}

#[test]
fn config_roundtrips_through_yaml() {
    let config = RunConfig {
        phase: "Om_moorings".to_string(),
        order: vec![ResourceKind::Vessel],
        resolve: false,
        max_solutions_per_combination: Some(3),
        base_port: BasePortPolicy::NearestTo {
            latitude: 41.0,
            longitude: -8.9,
        },
    };
    let yaml = config.to_yaml_string().unwrap();
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    assert_eq!(load_run_config(file.path()).unwrap(), config);
    assert_eq!(
        config.config_hash().unwrap(),
        load_run_config(file.path()).unwrap().config_hash().unwrap()
    );
}

#[test]
fn invalid_orders_are_config_errors() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(b"phase: F_driven\norder: [vessel, vessel]\n").unwrap();
    let err = load_run_config(file.path()).unwrap_err();
    assert_eq!(err.code(), "duplicate-kind");
    assert!(err.info().context.contains_key("path"));

    let mut config = RunConfig::new("F_driven");
    config.order.clear();
    assert_eq!(config.validate().unwrap_err().code(), "empty-kind-order");
}

#[test]
fn requirement_sets_accept_generator_triples() {
    let json = r#"{
        "equipment": {
            "Hammer": [["SleeveDiameter_m", "sup", 2.5]]
        },
        "vessels": {
            "Tugboat": [{"attribute": "DeckLoading_ton_per_m2", "comparator": "at_least", "threshold": 20.0}],
            "Crane Barge": [["DeckSpace_m2", "at_most", 900.0]]
        }
    }"#;
    let requirements: RequirementSet = serde_json::from_str(json).unwrap();

    assert_eq!(
        requirements.equipment[&type_id("Hammer")],
        vec![Requirement::at_least("SleeveDiameter_m", 2.5)]
    );
    let vessel_types: Vec<_> = requirements.vessels.keys().map(|k| k.as_str()).collect();
    assert_eq!(vessel_types, vec!["Tugboat", "Crane Barge"]);
    assert_eq!(requirements.vessels[1][0].comparator, Comparator::AtMost);
    assert_eq!(requirements.len(), 3);

    let written = serde_json::to_value(&requirements).unwrap();
    assert_eq!(written["equipment"]["Hammer"][0]["comparator"], "at_least");
}

#[test]
fn report_marks_infeasible_variants_without_failing() {
    let mut phase = common::driven_piles();
    let requirements = RequirementSet::new()
        .with(
            ResourceKind::Equipment,
            type_id("Hammer"),
            Requirement::at_least("SleeveDiameter_m", 9.0),
        )
        .with(
            ResourceKind::Equipment,
            type_id("Divers"),
            Requirement::at_least("Capacity_t", 1.0),
        );

    let report = run_phase(&RunConfig::new("F_driven"), &requirements, &mut phase).unwrap();

    assert!(report.feasible);
    assert_eq!(report.variants.len(), 3);
    let drilling = &report.variants[0];
    assert_eq!(drilling.state, VariantState::Feasible);
    assert_eq!(drilling.solutions, 12);
    let hammering = &report.variants[1];
    assert_eq!(hammering.index, VariantIndex::from_raw(1));
    assert_eq!(hammering.state, VariantState::Infeasible);
    assert_eq!(hammering.message.as_deref(), Some(INFEASIBLE_MESSAGE));
    assert_eq!(hammering.error.as_ref().unwrap().code(), "no-feasible-combination");
    assert_eq!(report.variants[2].state, VariantState::Infeasible);
    assert_eq!(report.pruned.len(), 4);
    assert!(matches!(
        report.notes.as_slice(),
        [SelectionNote::EmptyRequirementTarget { .. }]
    ));
    assert_eq!(report.provenance.requirements_hash.len(), 64);
    assert_eq!(report.report_hash().unwrap(), report.clone().report_hash().unwrap());
}

#[test]
fn fully_infeasible_phase_is_reported() {
    let mut phase = common::om_phase("Om_topside", &common::fleet());
    let mut requirements = RequirementSet::new();
    for vessel in ["CTV", "Multicat", "Helicopter"] {
        requirements.push(
            ResourceKind::Vessel,
            type_id(vessel),
            Requirement::at_least("DeckSpace_m2", 5_000.0),
        );
    }

    let report = run_phase(&RunConfig::new("Om_topside"), &requirements, &mut phase).unwrap();

    assert!(!report.feasible);
    assert_eq!(report.solution_count(), 0);
    assert_eq!(phase.combination_count(), 0);
}

#[test]
fn mismatched_phase_is_rejected() {
    let mut phase = common::driven_piles();
    let err = run_phase(&RunConfig::new("Om_topside"), &RequirementSet::new(), &mut phase)
        .unwrap_err();
    assert_eq!(err.code(), "phase-mismatch");
}

#[test]
fn config_picks_the_base_port() {
    let ports = PortCatalog::new(
        Schema::numeric(&[LOAD_BEARING, TERMINAL_AREA]).unwrap(),
        vec![
            PortRecord::new("Far", [(LOAD_BEARING, 20.0), (TERMINAL_AREA, 1_000.0)])
                .at(60.0, 5.0),
            PortRecord::new("Near", [(LOAD_BEARING, 20.0), (TERMINAL_AREA, 1_000.0)])
                .at(41.1, -8.7),
        ],
    )
    .unwrap();
    let requirements = om_port_requirements(&SparePartCargo {
        length_m: 12.0,
        width_m: 4.0,
        total_mass_t: 240.0,
    })
    .unwrap();

    let mut config = RunConfig::new("Om_moorings");
    assert_eq!(config.select_base_port(&ports, &requirements).unwrap().chosen.name, "Far");
    config.base_port = BasePortPolicy::NearestTo {
        latitude: 41.0,
        longitude: -9.0,
    };
    assert_eq!(config.select_base_port(&ports, &requirements).unwrap().chosen.name, "Near");
}
