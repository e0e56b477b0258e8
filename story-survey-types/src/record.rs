use serde::{Deserialize, Serialize};

/// Value written to the `gender` column, which the survey never asks about.
pub const GENDER_PLACEHOLDER: &str = "not-specified";

/// One row of the `survey_responses` collection.
///
/// Structured answers map onto dedicated columns; the narrative answers are
/// folded into `additional_comments` as labelled paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub name: String,
    pub email: String,
    /// Holds the caregiving duration label. The column name predates the survey.
    pub age_range: String,
    pub gender: String,
    pub relationship_status: String,
    pub relationship_other: Option<String>,
    /// Selected support systems, comma separated, in selection order.
    pub support_systems: String,
    pub support_other: Option<String>,
    /// The 1-10 difficulty rating.
    pub stress_level: u8,
    pub additional_comments: String,
}
