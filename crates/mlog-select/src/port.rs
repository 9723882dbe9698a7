//! Base-port selection over the port registry.

use std::cmp::Ordering;

use mlog_catalog::{Coordinates, PortCatalog, PortRecord, LOAD_BEARING, TERMINAL_AREA};
use mlog_core::errors::{ErrorInfo, MlogError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filter::{check_requirements, filter_rows};
use crate::requirement::Requirement;

/// How the base port is chosen among the feasible ports.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum BasePortPolicy {
    /// First feasible port in registry order. Placeholder until every caller
    /// supplies a site position.
    #[default]
    FirstFeasible,
    /// Feasible port closest to the site; ports without coordinates rank last.
    NearestTo {
        /// Site latitude in decimal degrees.
        latitude: f64,
        /// Site longitude in decimal degrees.
        longitude: f64,
    },
}

/// Ports surviving the requirements and the chosen base port.
#[derive(Debug, Clone, PartialEq)]
pub struct PortSelection<'a> {
    /// Feasible ports in registry order.
    pub feasible: Vec<&'a PortRecord>,
    /// Base port picked by the policy.
    pub chosen: &'a PortRecord,
    /// Distance from the site to the chosen port, when both positions are known.
    pub distance_km: Option<f64>,
}

/// Filters the registry with `requirements` and picks a base port.
pub fn select_port<'a>(
    catalog: &'a PortCatalog,
    requirements: &[Requirement],
    policy: &BasePortPolicy,
) -> Result<PortSelection<'a>, MlogError> {
    check_requirements(catalog.schema(), "port catalog", requirements)?;

    let mut feasible: Vec<&PortRecord> = catalog.ports().iter().collect();
    for requirement in requirements {
        feasible = filter_rows(feasible, std::slice::from_ref(requirement));
        debug!(
            attribute = %requirement.attribute,
            comparator = requirement.comparator.symbol(),
            threshold = requirement.threshold,
            remaining = feasible.len(),
            "port filter applied"
        );
    }

    let site = match policy {
        BasePortPolicy::FirstFeasible => None,
        BasePortPolicy::NearestTo {
            latitude,
            longitude,
        } => Some(Coordinates {
            latitude: *latitude,
            longitude: *longitude,
        }),
    };
    let distance = |port: &PortRecord| {
        site.zip(port.coordinates)
            .map(|(site, coordinates)| site.distance_km(&coordinates))
    };
    let chosen = match site {
        None => feasible.first().copied(),
        Some(_) => feasible
            .iter()
            .copied()
            .min_by(|left, right| rank(distance(*left), distance(*right))),
    };
    let chosen = chosen.ok_or_else(|| {
        MlogError::NoFeasiblePort(
            ErrorInfo::new("no-feasible-port", "no port satisfies the requirements")
                .with_context("ports", catalog.len().to_string())
                .with_context(
                    "requirements",
                    requirements
                        .iter()
                        .map(|r| {
                            format!("{} {} {}", r.attribute, r.comparator.symbol(), r.threshold)
                        })
                        .collect::<Vec<_>>()
                        .join(", "),
                )
                .with_hint("relax the requirements or extend the port registry"),
        )
    })?;
    Ok(PortSelection {
        distance_km: distance(chosen),
        feasible,
        chosen,
    })
}

fn rank(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Plan dimensions and dry mass of the device handled at port.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceFootprint {
    /// Length in m.
    pub length_m: f64,
    /// Width in m.
    pub width_m: f64,
    /// Dry mass in t.
    pub dry_mass_t: f64,
}

/// Projected dimensions and mass of one foundation element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoundationFootprint {
    /// Diameter in m.
    pub diameter_m: f64,
    /// Length in m.
    pub length_m: f64,
    /// Dry mass in t.
    pub dry_mass_t: f64,
}

/// Spare parts staged at the O&M base port.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparePartCargo {
    /// Length in m.
    pub length_m: f64,
    /// Width in m.
    pub width_m: f64,
    /// Total mass in t.
    pub total_mass_t: f64,
}

fn footprint(what: &str, a: f64, b: f64) -> Result<f64, MlogError> {
    let area = a * b;
    if !(area.is_finite() && area > 0.0) {
        return Err(MlogError::Config(
            ErrorInfo::new("degenerate-footprint", "footprint area must be positive")
                .with_context("element", what)
                .with_context("area", area.to_string()),
        ));
    }
    Ok(area)
}

/// Installation base-port requirements: load bearing at least the heaviest
/// unit loading, terminal area at least the larger of the device footprint
/// and the summed foundation footprints.
pub fn installation_port_requirements(
    device: &DeviceFootprint,
    foundations: &[FoundationFootprint],
) -> Result<Vec<Requirement>, MlogError> {
    let device_area = footprint("device", device.length_m, device.width_m)?;
    let mut loading = device.dry_mass_t / device_area;
    let mut foundation_area = 0.0;
    for foundation in foundations {
        let area = footprint("foundation", foundation.diameter_m, foundation.length_m)?;
        loading = loading.max(foundation.dry_mass_t / area);
        foundation_area += area;
    }
    Ok(vec![
        Requirement::at_least(LOAD_BEARING, loading),
        Requirement::at_least(TERMINAL_AREA, device_area.max(foundation_area)),
    ])
}

/// O&M base-port requirements: terminal area for the spare parts, then load
/// bearing for their total mass spread over that area.
pub fn om_port_requirements(cargo: &SparePartCargo) -> Result<Vec<Requirement>, MlogError> {
    let area = footprint("spare parts", cargo.length_m, cargo.width_m)?;
    Ok(vec![
        Requirement::at_least(TERMINAL_AREA, area),
        Requirement::at_least(LOAD_BEARING, cargo.total_mass_t / area),
    ])
}
