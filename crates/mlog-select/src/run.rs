//! Planning-run configuration and the per-phase feasibility report.

use std::collections::BTreeSet;
use std::path::Path;

use mlog_catalog::PortCatalog;
use mlog_core::errors::{ErrorInfo, MlogError};
use mlog_core::provenance::{RunProvenance, SchemaVersion};
use mlog_core::serde::{read_document, to_yaml_string};
use mlog_core::{stable_hash_string, PhaseId, ResourceKind, VariantIndex};
use mlog_phase::LogisticPhase;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::port::{select_port, BasePortPolicy, PortSelection};
use crate::requirement::{Requirement, RequirementSet};
use crate::resolve::{resolve_phase, Positional};
use crate::select::{select_in_order, PrunedCombination, SelectionNote};

/// Status message attached to variants without any surviving solution.
pub const INFEASIBLE_MESSAGE: &str = "infeasible under current requirements";

/// Options of a planning run over one logistic phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Key of the phase to plan (e.g. `F_driven`).
    pub phase: String,
    /// Resource kinds to select, in order.
    #[serde(default = "RunConfig::default_order")]
    pub order: Vec<ResourceKind>,
    /// Whether surviving combinations are resolved into solutions.
    #[serde(default = "RunConfig::default_resolve")]
    pub resolve: bool,
    /// Upper bound on solutions per combination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_solutions_per_combination: Option<usize>,
    /// Base-port choice among feasible ports.
    #[serde(default)]
    pub base_port: BasePortPolicy,
}

impl RunConfig {
    /// Creates a configuration with defaults for `phase`.
    pub fn new(phase: impl Into<String>) -> Self {
        Self {
            phase: phase.into(),
            order: Self::default_order(),
            resolve: Self::default_resolve(),
            max_solutions_per_combination: None,
            base_port: BasePortPolicy::default(),
        }
    }

    fn default_order() -> Vec<ResourceKind> {
        vec![ResourceKind::Equipment, ResourceKind::Vessel]
    }

    fn default_resolve() -> bool {
        true
    }

    /// Rejects configurations the engine cannot honour.
    pub fn validate(&self) -> Result<(), MlogError> {
        if self.phase.trim().is_empty() {
            return Err(MlogError::config("empty-phase", "run configuration names no phase"));
        }
        if self.order.is_empty() {
            return Err(MlogError::Config(
                ErrorInfo::new("empty-kind-order", "selection order lists no resource kind")
                    .with_hint("use [equipment, vessel]"),
            ));
        }
        let unique: BTreeSet<_> = self.order.iter().collect();
        if unique.len() != self.order.len() {
            return Err(MlogError::config(
                "duplicate-kind",
                "selection order lists a resource kind twice",
            ));
        }
        Ok(())
    }

    /// Returns the deterministic hash of the configuration.
    pub fn config_hash(&self) -> Result<String, MlogError> {
        stable_hash_string(self)
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, MlogError> {
        to_yaml_string(self)
    }

    /// Picks the base port with the configured policy.
    pub fn select_base_port<'a>(
        &self,
        catalog: &'a PortCatalog,
        requirements: &[Requirement],
    ) -> Result<PortSelection<'a>, MlogError> {
        select_port(catalog, requirements, &self.base_port)
    }
}

/// Loads and validates a run configuration from YAML or JSON.
pub fn load_run_config(path: &Path) -> Result<RunConfig, MlogError> {
    let config: RunConfig = read_document(path)?;
    config
        .validate()
        .map_err(|err| err.with_context("path", path.display().to_string()))?;
    Ok(config)
}

/// Outcome class of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantState {
    /// At least one combination (and solution, when resolving) survived.
    Feasible,
    /// Nothing survived.
    Infeasible,
}

/// Per-variant section of a [`PhaseReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantReport {
    /// Variant index within the phase.
    pub index: VariantIndex,
    /// Variant label.
    pub label: String,
    /// Feasibility state.
    pub state: VariantState,
    /// Surviving combinations.
    pub combinations: usize,
    /// Resolved solutions.
    pub solutions: usize,
    /// Status message for infeasible variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Structured infeasibility payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<MlogError>,
}

/// Feasibility summary of one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseReport {
    /// Phase identifier.
    pub phase_id: PhaseId,
    /// Phase key.
    pub phase_key: String,
    /// True when at least one variant is feasible.
    pub feasible: bool,
    /// Variant sections in index order.
    pub variants: Vec<VariantReport>,
    /// Combinations removed during selection.
    #[serde(default)]
    pub pruned: Vec<PrunedCombination>,
    /// Selection diagnostics.
    #[serde(default)]
    pub notes: Vec<SelectionNote>,
    /// Input fingerprints.
    pub provenance: RunProvenance,
}

impl PhaseReport {
    /// Returns the deterministic hash of the report.
    pub fn report_hash(&self) -> Result<String, MlogError> {
        stable_hash_string(self)
    }

    /// Total solutions across variants.
    pub fn solution_count(&self) -> usize {
        self.variants.iter().map(|variant| variant.solutions).sum()
    }
}

/// Selects, optionally resolves, and reports on `phase`.
///
/// Infeasible variants are reported, never raised; only schema mismatches
/// and configuration errors abort the run.
pub fn run_phase(
    config: &RunConfig,
    requirements: &RequirementSet,
    phase: &mut LogisticPhase,
) -> Result<PhaseReport, MlogError> {
    config.validate()?;
    if config.phase != phase.key() {
        return Err(MlogError::Config(
            ErrorInfo::new("phase-mismatch", "configuration targets another phase")
                .with_context("configured", config.phase.clone())
                .with_context("phase", phase.key()),
        ));
    }

    let outcome = select_in_order(requirements, phase, &config.order)?;
    if config.resolve {
        let strategy = Positional {
            cap: config.max_solutions_per_combination,
        };
        resolve_phase(phase, &strategy)?;
    }

    let variants: Vec<VariantReport> = phase
        .variants()
        .iter()
        .map(|(index, variant)| {
            let combinations = variant.combinations().len();
            let solutions = variant.solutions().len();
            let feasible = combinations > 0 && (!config.resolve || solutions > 0);
            let (state, message, error) = if feasible {
                (VariantState::Feasible, None, None)
            } else {
                let error = MlogError::NoFeasibleCombination(
                    ErrorInfo::new("no-feasible-combination", INFEASIBLE_MESSAGE)
                        .with_context("phase", phase.key())
                        .with_context("variant", variant.label()),
                );
                (
                    VariantState::Infeasible,
                    Some(INFEASIBLE_MESSAGE.to_string()),
                    Some(error),
                )
            };
            VariantReport {
                index: *index,
                label: variant.label().to_string(),
                state,
                combinations,
                solutions,
                message,
                error,
            }
        })
        .collect();

    let report = PhaseReport {
        phase_id: phase.id(),
        phase_key: phase.key().to_string(),
        feasible: variants
            .iter()
            .any(|variant| variant.state == VariantState::Feasible),
        variants,
        pruned: outcome.pruned,
        notes: outcome.notes,
        provenance: RunProvenance {
            schema_version: SchemaVersion::default(),
            requirements_hash: stable_hash_string(requirements)?,
            config_hash: config.config_hash()?,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };
    info!(
        phase = %report.phase_key,
        feasible = report.feasible,
        pruned = report.pruned.len(),
        solutions = report.solution_count(),
        "phase planned"
    );
    Ok(report)
}
