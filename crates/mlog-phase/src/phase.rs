//! Logistic phases and their operation-sequence variants.

use std::collections::BTreeMap;
use std::sync::Arc;

use mlog_catalog::Operation;
use mlog_core::{CombinationIndex, PhaseId, SolutionIndex, VariantIndex};

use crate::combination::CombinationOption;
use crate::solution::Solution;

/// One alternative ordered set of operations accomplishing a phase.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceVariant {
    id: u32,
    label: String,
    operations: Vec<Arc<Operation>>,
    combinations: BTreeMap<CombinationIndex, CombinationOption>,
    next_combination: u32,
    solutions: BTreeMap<SolutionIndex, Solution>,
}

impl SequenceVariant {
    /// Creates a variant with its operation sequence and no combination.
    pub fn new(id: u32, label: impl Into<String>, operations: Vec<Arc<Operation>>) -> Self {
        Self {
            id,
            label: label.into(),
            operations,
            combinations: BTreeMap::new(),
            next_combination: 0,
            solutions: BTreeMap::new(),
        }
    }

    /// Returns the variant's own identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the variant label (e.g. `Hammering`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the operation sequence.
    pub fn operations(&self) -> &[Arc<Operation>] {
        &self.operations
    }

    /// Returns the surviving combinations.
    pub fn combinations(&self) -> &BTreeMap<CombinationIndex, CombinationOption> {
        &self.combinations
    }

    /// Returns the combination under `index`.
    pub fn combination(&self, index: CombinationIndex) -> Option<&CombinationOption> {
        self.combinations.get(&index)
    }

    /// Returns the combination under `index` for narrowing.
    pub fn combination_mut(&mut self, index: CombinationIndex) -> Option<&mut CombinationOption> {
        self.combinations.get_mut(&index)
    }

    /// Appends a combination under the next free index.
    pub fn push_combination(&mut self, combination: CombinationOption) -> CombinationIndex {
        let index = CombinationIndex::from_raw(self.next_combination);
        self.next_combination += 1;
        self.combinations.insert(index, combination);
        index
    }

    /// Removes a combination; its index is not reused.
    pub fn remove_combination(&mut self, index: CombinationIndex) -> Option<CombinationOption> {
        self.combinations.remove(&index)
    }

    /// Returns the resolved solutions.
    pub fn solutions(&self) -> &BTreeMap<SolutionIndex, Solution> {
        &self.solutions
    }

    /// Returns the identifier the next appended solution receives.
    pub fn next_solution_id(&self) -> SolutionIndex {
        SolutionIndex::from_raw(
            self.solutions
                .keys()
                .next_back()
                .map_or(0, |last| last.as_raw() + 1),
        )
    }

    /// Stores a solution under its own identifier.
    pub fn insert_solution(&mut self, solution: Solution) {
        self.solutions.insert(solution.id, solution);
    }

    /// Replaces the resolved solutions.
    pub fn set_solutions(&mut self, solutions: impl IntoIterator<Item = Solution>) {
        self.solutions = solutions
            .into_iter()
            .map(|solution| (solution.id, solution))
            .collect();
    }
}

/// A stage of an installation or O&M campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticPhase {
    id: PhaseId,
    key: String,
    description: String,
    variants: BTreeMap<VariantIndex, SequenceVariant>,
}

impl LogisticPhase {
    /// Creates a phase without variants.
    pub fn new(id: PhaseId, key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            description: description.into(),
            variants: BTreeMap::new(),
        }
    }

    /// Returns the numeric phase identifier.
    pub fn id(&self) -> PhaseId {
        self.id
    }

    /// Returns the symbolic phase key (e.g. `F_driven`).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the variants.
    pub fn variants(&self) -> &BTreeMap<VariantIndex, SequenceVariant> {
        &self.variants
    }

    /// Returns the variants for in-place narrowing.
    pub fn variants_mut(&mut self) -> &mut BTreeMap<VariantIndex, SequenceVariant> {
        &mut self.variants
    }

    /// Returns the variant under `index`.
    pub fn variant(&self, index: VariantIndex) -> Option<&SequenceVariant> {
        self.variants.get(&index)
    }

    /// Returns the variant under `index` for mutation.
    pub fn variant_mut(&mut self, index: VariantIndex) -> Option<&mut SequenceVariant> {
        self.variants.get_mut(&index)
    }

    /// Appends a variant under the next free index.
    pub fn push_variant(&mut self, variant: SequenceVariant) -> VariantIndex {
        let index = VariantIndex::from_raw(self.variants.len() as u32);
        self.variants.insert(index, variant);
        index
    }

    /// Counts the combinations still present across all variants.
    pub fn combination_count(&self) -> usize {
        self.variants.values().map(|variant| variant.combinations.len()).sum()
    }

    /// Counts the solutions across all variants.
    pub fn solution_count(&self) -> usize {
        self.variants.values().map(|variant| variant.solutions.len()).sum()
    }
}
