#![deny(missing_docs)]
#![doc = "Logistic phase model: operation-sequence variants, vessel and equipment combinations, narrowable role views and resolved solutions."]

pub mod builder;
pub mod combination;
pub mod definitions;
pub mod phase;
pub mod solution;
pub mod view;

pub use builder::PhaseBuilder;
pub use combination::{CombinationOption, RoleSlot};
pub use definitions::{
    build_phases, load_phase_specs, standard_installation_specs, standard_om_specs,
    CombinationSpec, PhaseSpec, RoleSpec, VariantSpec,
};
pub use phase::{LogisticPhase, SequenceVariant};
pub use solution::{ResolvedPick, Solution};
pub use view::CandidateView;
