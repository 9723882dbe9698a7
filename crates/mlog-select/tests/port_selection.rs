use mlog_catalog::{PortCatalog, PortRecord, Schema, LOAD_BEARING, TERMINAL_AREA};
use mlog_core::errors::MlogError;
use mlog_select::{
    installation_port_requirements, om_port_requirements, select_port, BasePortPolicy,
    DeviceFootprint, FoundationFootprint, Requirement, SparePartCargo,
};

fn registry() -> PortCatalog {
    let port = |name: &str, area: f64, load: f64| {
        PortRecord::new(name, [(TERMINAL_AREA, area), (LOAD_BEARING, load)])
    };
    PortCatalog::new(
        Schema::numeric(&[LOAD_BEARING, TERMINAL_AREA]).unwrap(),
        vec![
            port("Aveiro", 300.0, 12.0).at(40.64, -8.75),
            port("Leixoes", 450.0, 8.0).at(41.18, -8.70),
            port("Sines", 500.0, 15.0).at(37.95, -8.87),
            port("Setubal", 200.0, 20.0).at(38.52, -8.89),
            port("Peniche", 350.0, 25.0),
        ],
    )
    .unwrap()
}

#[test]
fn filters_compose_and_first_survivor_is_chosen() {
    let ports = registry();
    let area = Requirement::at_least(TERMINAL_AREA, 400.0);
    let load = Requirement::at_least(LOAD_BEARING, 10.0);

    let by_area = select_port(&ports, std::slice::from_ref(&area), &BasePortPolicy::FirstFeasible)
        .unwrap();
    let names: Vec<_> = by_area.feasible.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Leixoes", "Sines"]);

    let both = select_port(&ports, &[area, load], &BasePortPolicy::FirstFeasible).unwrap();
    assert_eq!(both.feasible.len(), 1);
    assert_eq!(both.feasible[0].name, "Sines");
    assert!(std::ptr::eq(both.chosen, both.feasible[0]));
    assert_eq!(both.distance_km, None);
}

#[test]
fn emptied_registry_signals_no_feasible_port() {
    let ports = registry();
    let err = select_port(
        &ports,
        &[
            Requirement::at_least(TERMINAL_AREA, 900.0),
            Requirement::at_least(LOAD_BEARING, 30.0),
        ],
        &BasePortPolicy::default(),
    )
    .unwrap_err();
    assert!(matches!(err, MlogError::NoFeasiblePort(_)));
    assert_eq!(err.code(), "no-feasible-port");
    assert!(err.info().hint.is_some());
}

#[test]
fn nearest_policy_ranks_by_distance_and_skips_unknown_positions() {
    let ports = registry();
    let near_lisbon = BasePortPolicy::NearestTo {
        latitude: 38.70,
        longitude: -9.40,
    };
    let selection = select_port(&ports, &[Requirement::at_least(LOAD_BEARING, 10.0)], &near_lisbon)
        .unwrap();
    assert_eq!(selection.chosen.name, "Setubal");
    assert!(selection.distance_km.unwrap() < 60.0);

    // Peniche is the only survivor and has no coordinates.
    let selection = select_port(&ports, &[Requirement::at_least(LOAD_BEARING, 22.0)], &near_lisbon)
        .unwrap();
    assert_eq!(selection.chosen.name, "Peniche");
    assert_eq!(selection.distance_km, None);
}

#[test]
fn unknown_port_attributes_are_schema_mismatches() {
    let err = select_port(
        &registry(),
        &[Requirement::at_least("Draft_m", 8.0)],
        &BasePortPolicy::FirstFeasible,
    )
    .unwrap_err();
    assert!(err.is_schema_mismatch());
}

#[test]
fn installation_requirements_use_heaviest_loading_and_largest_area() {
    let device = DeviceFootprint {
        length_m: 20.0,
        width_m: 10.0,
        dry_mass_t: 1_000.0,
    };
    let piles = [
        FoundationFootprint {
            diameter_m: 2.0,
            length_m: 30.0,
            dry_mass_t: 900.0,
        };
        4
    ];
    let requirements = installation_port_requirements(&device, &piles).unwrap();
    assert_eq!(requirements[0], Requirement::at_least(LOAD_BEARING, 15.0));
    assert_eq!(requirements[1], Requirement::at_least(TERMINAL_AREA, 240.0));

    let floating = installation_port_requirements(&device, &[]).unwrap();
    assert_eq!(floating[0], Requirement::at_least(LOAD_BEARING, 5.0));
    assert_eq!(floating[1], Requirement::at_least(TERMINAL_AREA, 200.0));
}

#[test]
fn om_requirements_filter_area_first() {
    let cargo = SparePartCargo {
        length_m: 10.0,
        width_m: 5.0,
        total_mass_t: 500.0,
    };
    let requirements = om_port_requirements(&cargo).unwrap();
    assert_eq!(
        requirements,
        vec![
            Requirement::at_least(TERMINAL_AREA, 50.0),
            Requirement::at_least(LOAD_BEARING, 10.0),
        ]
    );
    let registry = registry();
    let selection = select_port(&registry, &requirements, &BasePortPolicy::default()).unwrap();
    assert_eq!(selection.chosen.name, "Aveiro");

    let flat = SparePartCargo {
        width_m: 0.0,
        ..cargo
    };
    assert_eq!(om_port_requirements(&flat).unwrap_err().code(), "degenerate-footprint");
}
