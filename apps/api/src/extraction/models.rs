use serde::{Deserialize, Serialize};

/// Rating of one catalog criterion, justified in the evaluated person's voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfAssessmentEntry {
    pub pillar_id: String,
    pub criteria_id: String,
    /// 1..=5
    pub rating: u8,
    pub justification: String,
}

/// Peer evaluation of one collaborator. `strengths` and `improvements` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation360Entry {
    pub collaborator_id: String,
    pub rating: u8,
    pub strengths: String,
    pub improvements: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentoringEntry {
    pub rating: u8,
    pub justification: String,
}

/// Nomination of a peer as an exemplary reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub collaborator_id: String,
    pub justification: String,
}

/// Fully validated evaluation extracted from the notes.
///
/// The three sequences are always present (possibly empty); `mentoring` is
/// the only field that serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub self_assessment: Vec<SelfAssessmentEntry>,
    pub evaluation360: Vec<Evaluation360Entry>,
    pub mentoring: Option<MentoringEntry>,
    pub references: Vec<ReferenceEntry>,
}

/// Successful body of the extraction endpoint, discriminated by `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum ExtractionResponse {
    #[serde(rename = "NO_INSIGHT")]
    NoInsight,
    #[serde(rename = "SUCCESS")]
    Success(EvaluationResult),
}
