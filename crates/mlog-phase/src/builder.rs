//! Incremental phase construction.

use std::sync::Arc;

use mlog_catalog::Operation;
use mlog_core::errors::{ErrorInfo, MlogError};
use mlog_core::{CombinationIndex, PhaseId, VariantIndex};

use crate::combination::CombinationOption;
use crate::phase::{LogisticPhase, SequenceVariant};

/// Incremental constructor for [`LogisticPhase`].
#[derive(Debug, Clone)]
pub struct PhaseBuilder {
    phase: LogisticPhase,
}

impl PhaseBuilder {
    /// Starts a phase definition.
    pub fn new(id: PhaseId, key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            phase: LogisticPhase::new(id, key, description),
        }
    }

    /// Adds a variant with its operation sequence.
    pub fn variant(
        &mut self,
        id: u32,
        label: impl Into<String>,
        operations: Vec<Arc<Operation>>,
    ) -> VariantIndex {
        self.phase
            .push_variant(SequenceVariant::new(id, label, operations))
    }

    /// Adds a combination to an existing variant.
    pub fn combination(
        &mut self,
        variant: VariantIndex,
        combination: CombinationOption,
    ) -> Result<CombinationIndex, MlogError> {
        if combination.role_count() == 0 {
            return Err(MlogError::Config(
                ErrorInfo::new("empty-combination", "a combination needs at least one role")
                    .with_context("phase", self.phase.key())
                    .with_context("variant", variant.to_string()),
            ));
        }
        let key = self.phase.key().to_string();
        let target = self.phase.variant_mut(variant).ok_or_else(|| {
            MlogError::Config(
                ErrorInfo::new("unknown-variant", "variant is not defined in the phase")
                    .with_context("phase", key)
                    .with_context("variant", variant.to_string()),
            )
        })?;
        Ok(target.push_combination(combination))
    }

    /// Finalises the phase.
    pub fn build(self) -> LogisticPhase {
        self.phase
    }
}
