use serde::{Deserialize, Serialize};

/// A single self-assessment criterion inside a pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarCriterion {
    /// Omitted in catalog files; filled from the enclosing pillar on load.
    #[serde(default)]
    pub pillar_id: String,
    pub criteria_id: String,
    pub name: String,
    pub description: String,
}

/// An evaluation pillar (e.g. "Gestão e Liderança") and its ordered criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub pillar_id: String,
    pub title: String,
    pub criteria: Vec<PillarCriterion>,
}

/// A peer the evaluated person works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    pub collaborator_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub name: String,
}

/// Immutable reference data embedded in every generation prompt.
///
/// Built once at startup and shared behind an `Arc`; never mutated while
/// requests are being served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    pub pillars: Vec<Pillar>,
    pub collaborators: Vec<Collaborator>,
    pub mentor: Mentor,
}
