//! Reference Catalog: pillars/criteria, collaborator roster and mentor identity.
//!
//! Loaded once at startup (built-in default or a JSON file) and handed to the
//! prompt composer as an immutable value.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

pub mod builtin;
pub mod models;

pub use models::{Collaborator, Mentor, Pillar, PillarCriterion, ReferenceCatalog};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate collaboratorId '{0}' in roster")]
    DuplicateCollaborator(String),

    #[error("Criterion '{criteria_id}' declares pillarId '{declared}' but belongs to pillar '{pillar_id}'")]
    PillarMismatch {
        pillar_id: String,
        criteria_id: String,
        declared: String,
    },

    #[error("Empty identifier: {0}")]
    EmptyIdentifier(String),
}

impl ReferenceCatalog {
    /// Reads and validates a catalog from a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: ReferenceCatalog = serde_json::from_str(raw)?;
        catalog.normalized()
    }

    /// Fills inherited criterion pillar ids and enforces roster invariants.
    pub fn normalized(mut self) -> Result<Self, CatalogError> {
        for pillar in &mut self.pillars {
            if pillar.pillar_id.trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier(format!(
                    "pillar '{}' has no pillarId",
                    pillar.title
                )));
            }
            for criterion in &mut pillar.criteria {
                if criterion.criteria_id.trim().is_empty() {
                    return Err(CatalogError::EmptyIdentifier(format!(
                        "criterion '{}' in pillar '{}' has no criteriaId",
                        criterion.name, pillar.pillar_id
                    )));
                }
                if criterion.pillar_id.is_empty() {
                    criterion.pillar_id = pillar.pillar_id.clone();
                } else if criterion.pillar_id != pillar.pillar_id {
                    return Err(CatalogError::PillarMismatch {
                        pillar_id: pillar.pillar_id.clone(),
                        criteria_id: criterion.criteria_id.clone(),
                        declared: criterion.pillar_id.clone(),
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for collaborator in &self.collaborators {
            if collaborator.collaborator_id.trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier(format!(
                    "collaborator '{}' has no collaboratorId",
                    collaborator.name
                )));
            }
            if !seen.insert(collaborator.collaborator_id.as_str()) {
                return Err(CatalogError::DuplicateCollaborator(
                    collaborator.collaborator_id.clone(),
                ));
            }
        }

        Ok(self)
    }

    pub fn criteria_count(&self) -> usize {
        self.pillars.iter().map(|p| p.criteria.len()).sum()
    }
}
