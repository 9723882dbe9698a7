#![deny(missing_docs)]
#![doc = "Feasibility selection, compatibility resolution and base-port selection for logistic phases."]

pub mod filter;
pub mod port;
pub mod requirement;
pub mod resolve;
pub mod run;
pub mod select;

pub use filter::{check_requirements, filter_rows, narrow_view};
pub use port::{
    installation_port_requirements, om_port_requirements, select_port, BasePortPolicy,
    DeviceFootprint, FoundationFootprint, PortSelection, SparePartCargo,
};
pub use requirement::{Comparator, Requirement, RequirementSet, TypeRequirements};
pub use resolve::{
    resolve, resolve_phase, resolve_variant, PickStrategy, Positional, RoleCandidates,
};
pub use run::{
    load_run_config, run_phase, PhaseReport, RunConfig, VariantReport, VariantState,
    INFEASIBLE_MESSAGE,
};
pub use select::{
    select, select_all, select_in_order, PrunedCombination, SelectionNote, SelectionOutcome,
};
