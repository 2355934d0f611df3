//! The eleven stages of the positioning & messaging program.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the fixed, ordered stages a user is guided through.
///
/// Steps are numbered 1 through 11. The number is the wire representation
/// (the browser and the session store both speak in step numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum WorkflowStep {
    ContextGathering,
    CustomerUnderstanding,
    StakeholderInterviews,
    CompetitivePositioning,
    FeatureBenefitTranslation,
    PositioningStatement,
    PositioningWorkshop,
    MessagingFramework,
    ProofPoints,
    AssetGeneration,
    MessageTesting,
}

impl WorkflowStep {
    /// First step number.
    pub const FIRST: i32 = 1;
    /// Last step number.
    pub const LAST: i32 = 11;

    /// All steps in program order.
    pub const ALL: [WorkflowStep; 11] = [
        WorkflowStep::ContextGathering,
        WorkflowStep::CustomerUnderstanding,
        WorkflowStep::StakeholderInterviews,
        WorkflowStep::CompetitivePositioning,
        WorkflowStep::FeatureBenefitTranslation,
        WorkflowStep::PositioningStatement,
        WorkflowStep::PositioningWorkshop,
        WorkflowStep::MessagingFramework,
        WorkflowStep::ProofPoints,
        WorkflowStep::AssetGeneration,
        WorkflowStep::MessageTesting,
    ];

    /// Looks up a step by its 1-based number.
    pub fn from_number(number: i32) -> Option<Self> {
        if (Self::FIRST..=Self::LAST).contains(&number) {
            Some(Self::ALL[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Returns the 1-based step number.
    pub fn number(&self) -> i32 {
        match self {
            Self::ContextGathering => 1,
            Self::CustomerUnderstanding => 2,
            Self::StakeholderInterviews => 3,
            Self::CompetitivePositioning => 4,
            Self::FeatureBenefitTranslation => 5,
            Self::PositioningStatement => 6,
            Self::PositioningWorkshop => 7,
            Self::MessagingFramework => 8,
            Self::ProofPoints => 9,
            Self::AssetGeneration => 10,
            Self::MessageTesting => 11,
        }
    }

    /// Returns the canonical step title shown to users.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ContextGathering => "Context Gathering & Planning",
            Self::CustomerUnderstanding => "Customer Understanding & Persona Development",
            Self::StakeholderInterviews => "Stakeholder & Customer Interviews",
            Self::CompetitivePositioning => "Category & Competitive Positioning",
            Self::FeatureBenefitTranslation => "Feature/Benefit Translation (\"Product Legos\")",
            Self::PositioningStatement => "Positioning Statement Creation",
            Self::PositioningWorkshop => "Positioning Workshop Facilitation",
            Self::MessagingFramework => "Messaging Framework & Brand Essence",
            Self::ProofPoints => "Proof Points & Narrative",
            Self::AssetGeneration => "Asset Generation & Application",
            Self::MessageTesting => "Asset Inventory & Message Testing",
        }
    }

    /// Returns the step that follows this one, if any.
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Returns true for the final step of the program.
    pub fn is_last(&self) -> bool {
        self.number() == Self::LAST
    }
}

impl Default for WorkflowStep {
    fn default() -> Self {
        Self::ContextGathering
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

impl TryFrom<i32> for WorkflowStep {
    type Error = ValidationError;

    fn try_from(number: i32) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or_else(|| {
            ValidationError::out_of_range("step", Self::FIRST, Self::LAST, number)
        })
    }
}

impl From<WorkflowStep> for i32 {
    fn from(step: WorkflowStep) -> Self {
        step.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip_through_lookup() {
        for step in WorkflowStep::ALL {
            assert_eq!(WorkflowStep::from_number(step.number()), Some(step));
        }
    }

    #[test]
    fn out_of_range_numbers_have_no_step() {
        assert_eq!(WorkflowStep::from_number(0), None);
        assert_eq!(WorkflowStep::from_number(12), None);
        assert_eq!(WorkflowStep::from_number(-3), None);
    }

    #[test]
    fn try_from_reports_range() {
        let err = WorkflowStep::try_from(12).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("step", 1, 11, 12));
    }

    #[test]
    fn next_walks_program_order() {
        assert_eq!(
            WorkflowStep::ContextGathering.next(),
            Some(WorkflowStep::CustomerUnderstanding)
        );
        assert_eq!(WorkflowStep::MessageTesting.next(), None);
        assert!(WorkflowStep::MessageTesting.is_last());
    }

    #[test]
    fn titles_are_distinct() {
        let mut titles: Vec<_> = WorkflowStep::ALL.iter().map(|s| s.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 11);
    }

    #[test]
    fn display_includes_number_and_title() {
        assert_eq!(
            WorkflowStep::ProofPoints.to_string(),
            "Step 9: Proof Points & Narrative"
        );
    }

    #[test]
    fn serializes_as_step_number() {
        let json = serde_json::to_string(&WorkflowStep::CustomerUnderstanding).unwrap();
        assert_eq!(json, "2");

        let step: WorkflowStep = serde_json::from_str("11").unwrap();
        assert_eq!(step, WorkflowStep::MessageTesting);

        assert!(serde_json::from_str::<WorkflowStep>("0").is_err());
    }
}
