//! Declarative phase definitions.
//!
//! A [`PhaseSpec`] names operations by catalog key and roles by resource
//! type. Building a spec resolves both against the catalogs; anything the
//! catalogs do not carry is a schema mismatch for that phase only.

use std::collections::BTreeMap;
use std::path::Path;

use mlog_catalog::{OperationCatalog, ResourceCatalog};
use mlog_core::errors::MlogError;
use mlog_core::serde::read_document;
use mlog_core::{PhaseId, ResourceKind, ResourceTypeId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::builder::PhaseBuilder;
use crate::combination::CombinationOption;
use crate::phase::LogisticPhase;
use crate::view::CandidateView;

/// A weighted role filled from a resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSpec {
    /// Role weight.
    #[serde(default = "RoleSpec::default_weight")]
    pub weight: u32,
    /// Resource type name as registered in the catalog.
    pub type_id: String,
}

impl RoleSpec {
    fn default_weight() -> u32 {
        1
    }
}

/// Vessel and equipment roles of one combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CombinationSpec {
    /// Vessel roles in role order.
    #[serde(default)]
    pub vessels: Vec<RoleSpec>,
    /// Equipment roles in role order.
    #[serde(default)]
    pub equipment: Vec<RoleSpec>,
}

/// An operation-sequence variant and its alternative combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSpec {
    /// Variant identifier.
    pub id: u32,
    /// Variant label.
    pub label: String,
    /// Operation keys in execution order.
    pub operations: Vec<String>,
    /// Alternative combinations.
    #[serde(default)]
    pub combinations: Vec<CombinationSpec>,
}

/// Declarative definition of a logistic phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSpec {
    /// Numeric phase identifier.
    pub id: PhaseId,
    /// Symbolic key (e.g. `F_driven`).
    pub key: String,
    /// Description.
    pub description: String,
    /// Variants in index order.
    #[serde(default)]
    pub variants: Vec<VariantSpec>,
}

impl PhaseSpec {
    /// Resolves operations and resource types into a [`LogisticPhase`] whose
    /// role views start with every row of their table.
    pub fn build(
        &self,
        operations: &OperationCatalog,
        resources: &ResourceCatalog,
    ) -> Result<LogisticPhase, MlogError> {
        let mut builder = PhaseBuilder::new(self.id, &self.key, &self.description);
        for variant in &self.variants {
            let sequence = variant
                .operations
                .iter()
                .map(|key| operations.get(key))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| err.with_context("phase", &self.key))?;
            let index = builder.variant(variant.id, &variant.label, sequence);
            for combination in &variant.combinations {
                let option = self
                    .combination(combination, resources)
                    .map_err(|err| {
                        err.with_context("phase", &self.key)
                            .with_context("variant", &variant.label)
                    })?;
                builder.combination(index, option)?;
            }
        }
        Ok(builder.build())
    }

    fn combination(
        &self,
        spec: &CombinationSpec,
        resources: &ResourceCatalog,
    ) -> Result<CombinationOption, MlogError> {
        let mut option = CombinationOption::new();
        for (kind, roles) in [
            (ResourceKind::Vessel, &spec.vessels),
            (ResourceKind::Equipment, &spec.equipment),
        ] {
            for role in roles {
                let type_id = ResourceTypeId::new(&role.type_id)?;
                let table = resources.table(kind, &type_id)?;
                option.push_role(kind, role.weight, CandidateView::full(table));
            }
        }
        Ok(option)
    }
}

/// Builds every spec independently, keyed by phase key.
///
/// A phase that fails to resolve does not prevent the others from building.
pub fn build_phases(
    specs: &[PhaseSpec],
    operations: &OperationCatalog,
    resources: &ResourceCatalog,
) -> BTreeMap<String, Result<LogisticPhase, MlogError>> {
    specs
        .iter()
        .map(|spec| {
            let built = spec.build(operations, resources);
            match &built {
                Ok(phase) => debug!(
                    phase = %spec.key,
                    variants = phase.variants().len(),
                    combinations = phase.combination_count(),
                    "phase built"
                ),
                Err(err) => warn!(phase = %spec.key, error = %err, "phase could not be built"),
            }
            (spec.key.clone(), built)
        })
        .collect()
}

/// Loads phase specs from a `.json` or YAML document.
pub fn load_phase_specs(path: &Path) -> Result<Vec<PhaseSpec>, MlogError> {
    read_document(path)
}

fn role(weight: u32, type_id: &str) -> RoleSpec {
    RoleSpec {
        weight,
        type_id: type_id.to_string(),
    }
}

fn combo(vessels: &[(u32, &str)], equipment: &[(u32, &str)]) -> CombinationSpec {
    CombinationSpec {
        vessels: vessels.iter().map(|(w, t)| role(*w, t)).collect(),
        equipment: equipment.iter().map(|(w, t)| role(*w, t)).collect(),
    }
}

fn keys(operations: &[&str]) -> Vec<String> {
    operations.iter().map(|key| key.to_string()).collect()
}

fn variant(
    id: u32,
    label: &str,
    operations: Vec<String>,
    combinations: Vec<CombinationSpec>,
) -> VariantSpec {
    VariantSpec {
        id,
        label: label.to_string(),
        operations,
        combinations,
    }
}

fn phase(id: u32, key: &str, description: &str, variants: Vec<VariantSpec>) -> PhaseSpec {
    PhaseSpec {
        id: PhaseId::from_raw(id),
        key: key.to_string(),
        description: description.to_string(),
        variants,
    }
}

// Heavy-lift vessel groupings shared by pile driving and retrieval phases.
const BARGE_TOWED: &[(u32, &str)] = &[(1, "Crane Barge"), (2, "Tugboat")];
const CRANE_VESSEL: &[(u32, &str)] = &[(1, "Crane Vessel")];
const JACKUP_TOWED: &[(u32, &str)] = &[(1, "JUP Barge"), (2, "Tugboat")];
const JACKUP_VESSEL: &[(u32, &str)] = &[(1, "JUP Vessel")];

fn driven_pile_variant(id: u32, label: &str, penetration: &str, tool: Option<&str>) -> VariantSpec {
    let operations = keys(&[
        "op1", "op2", "op3", "op4", "op5", penetration, "op_F7", "op6", "op7", "op8",
    ]);
    let combinations = match tool {
        Some(tool) => [BARGE_TOWED, CRANE_VESSEL, JACKUP_TOWED, JACKUP_VESSEL]
            .into_iter()
            .map(|vessels| combo(vessels, &[(1, tool)]))
            .collect(),
        None => Vec::new(),
    };
    variant(id, label, operations, combinations)
}

/// Installation phases (ids 1xx). Only driven-pile foundations carry
/// variants so far; the remaining phases are registered without them.
pub fn standard_installation_specs() -> Vec<PhaseSpec> {
    vec![
        phase(100, "E_export", "Installation of static subsea export power cables", Vec::new()),
        phase(101, "E_array", "Installation of static subsea inter-array power cables", Vec::new()),
        phase(102, "E_cp", "Installation of offshore electrical collection point", Vec::new()),
        phase(
            110,
            "F_driven",
            "Installation of driven piles foundations",
            vec![
                driven_pile_variant(1, "Drilling", "op_F1", Some("Drill Rig")),
                driven_pile_variant(2, "Hammering", "op_F2", Some("Hammer")),
                // No vibro-driving tool is catalogued yet.
                driven_pile_variant(3, "Vibro Piling", "op_F3", None),
            ],
        ),
        phase(
            111,
            "F_suction",
            "Installation of suction caissons for foundation systems",
            Vec::new(),
        ),
        phase(112, "F_gravity", "Installation of gravity based foundations", Vec::new()),
        phase(
            113,
            "M_drag",
            "Installation of mooring systems with drag-embedment anchors",
            Vec::new(),
        ),
        phase(
            114,
            "M_direct",
            "Installation of mooring systems with direct-embedment anchors",
            Vec::new(),
        ),
        phase(120, "D_fixed", "Installation of bottom fixed devices", Vec::new()),
        phase(121, "D_floating", "Installation of floating devices", Vec::new()),
    ]
}

fn om_sequence(specific: &str) -> Vec<String> {
    keys(&["op1", "op2", "op3", "op4", specific, "op7", "op8"])
}

fn each_with(vessels: &[&[(u32, &str)]], equipment: &str) -> Vec<CombinationSpec> {
    vessels
        .iter()
        .map(|group| combo(group, &[(1, equipment)]))
        .collect()
}

/// O&M and retrieval phases (ids 9xx).
pub fn standard_om_specs() -> Vec<PhaseSpec> {
    let ctv: &[(u32, &str)] = &[(1, "CTV")];
    let multicat: &[(u32, &str)] = &[(1, "Multicat")];
    let tugboat: &[(u32, &str)] = &[(1, "Tugboat")];
    let anchor_handling: &[(u32, &str)] = &[(1, "Anchor Handling")];
    let crane_barge: &[(u32, &str)] = &[(1, "Crane Barge")];
    let cable_repair: &[(u32, &str)] = &[(1, "Cable Repair Vessel")];
    let dive_support: &[(u32, &str)] = &[(1, "Dive Support Vessel")];
    let heavy_lift = [BARGE_TOWED, JACKUP_TOWED, CRANE_VESSEL, JACKUP_VESSEL];
    let mooring_support = [anchor_handling, multicat, tugboat, ctv];
    let towing = [crane_barge, tugboat, anchor_handling];

    vec![
        phase(
            900,
            "Om_topside",
            "O&M of top-side elements",
            vec![variant(
                1,
                "Om_topside",
                om_sequence("op_OM1"),
                vec![
                    combo(ctv, &[]),
                    combo(multicat, &[]),
                    combo(&[(1, "Helicopter")], &[]),
                ],
            )],
        ),
        phase(
            901,
            "Om_underwater_divers",
            "O&M underwater with divers",
            vec![variant(
                1,
                "Om_underwater_divers",
                om_sequence("op_OM2"),
                each_with(&[ctv, multicat, dive_support], "Divers"),
            )],
        ),
        phase(
            902,
            "Om_underwater_rov",
            "O&M underwater with rovs",
            vec![
                variant(
                    1,
                    "Underwater",
                    om_sequence("op_OM3"),
                    vec![
                        combo(multicat, &[(1, "Rov inspection")]),
                        combo(multicat, &[(1, "Rov workclass")]),
                        combo(ctv, &[(1, "Rov inspection")]),
                        combo(ctv, &[(1, "Rov workclass")]),
                    ],
                ),
                variant(
                    2,
                    "Near_surface",
                    om_sequence("op_OM4"),
                    each_with(&[multicat, ctv], "Rov workclass"),
                ),
            ],
        ),
        phase(
            903,
            "Om_moorings",
            "O&M of moorings systems",
            vec![
                variant(
                    1,
                    "Replace_mooring",
                    om_sequence("op_OM5"),
                    each_with(&mooring_support, "Rov workclass"),
                ),
                variant(
                    2,
                    "Maintenance_anchor",
                    om_sequence("op_OM6"),
                    each_with(&mooring_support, "Rov workclass"),
                ),
            ],
        ),
        phase(
            904,
            "Om_electrical",
            "O&M of electrical system",
            vec![
                variant(
                    1,
                    "Om_nonburied",
                    om_sequence("op_OM7"),
                    vec![combo(cable_repair, &[(1, "Rov workclass")])],
                ),
                variant(
                    2,
                    "Om_buried",
                    om_sequence("op_OM8"),
                    vec![
                        combo(cable_repair, &[(1, "Rov burial")]),
                        combo(cable_repair, &[(1, "Subsea Excavating Tools")]),
                    ],
                ),
            ],
        ),
        phase(
            905,
            "Rt_ondeck",
            "Retrieval of component by on-deck transportation",
            vec![
                variant(1, "Rt_surface", om_sequence("op_RT1"), each_with(&heavy_lift, "Divers")),
                variant(
                    2,
                    "Rt_underwater",
                    om_sequence("op_RT2"),
                    each_with(&heavy_lift, "Rov workclass"),
                ),
            ],
        ),
        phase(
            906,
            "Rt_towing",
            "Retrieval of component by towing transportation",
            vec![
                variant(1, "Rt_surface", om_sequence("op_RT3"), each_with(&towing, "Divers")),
                variant(
                    2,
                    "Rt_underwater",
                    om_sequence("op_RT4"),
                    each_with(&towing, "Rov workclass"),
                ),
            ],
        ),
        phase(
            907,
            "Rt_mooring",
            "Retrieval of a mooring line",
            vec![variant(
                1,
                "Rt_mooring",
                om_sequence("op_RT5"),
                each_with(&heavy_lift, "Rov workclass"),
            )],
        ),
        phase(
            908,
            "Rt_umbilical",
            "Retrieval of umbilical cable",
            vec![variant(
                1,
                "Rt_umbilical",
                om_sequence("op_RT6"),
                each_with(&heavy_lift, "Rov workclass"),
            )],
        ),
    ]
}
