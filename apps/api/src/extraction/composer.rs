//! Prompt Composer: deterministic (notes, catalog) → prompt string.

use serde::Serialize;

use crate::catalog::ReferenceCatalog;
use crate::extraction::prompts::{
    COLLABORATORS_HEADER, CRITERIA_HEADER, EVALUATION_TASK_PROMPT, MENTOR_HEADER, NOTES_HEADER,
};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, NO_FABRICATION_INSTRUCTION};

/// Builds the generation prompt.
///
/// Order is fixed: task specification, collaborator roster, pillar/criteria
/// catalog, mentor, then the notes verbatim. The catalog parts are serialized
/// as JSON so the generator can echo identifiers exactly.
///
/// Total: rejecting empty notes is the caller's job.
pub fn compose(notes: &str, catalog: &ReferenceCatalog) -> String {
    let sections = [
        EVALUATION_TASK_PROMPT.to_string(),
        NO_FABRICATION_INSTRUCTION.to_string(),
        JSON_ONLY_INSTRUCTION.to_string(),
        format!("{COLLABORATORS_HEADER}\n{}", to_json(&catalog.collaborators)),
        format!("{CRITERIA_HEADER}\n{}", to_json(&catalog.pillars)),
        format!("{MENTOR_HEADER}\n{}", to_json(&catalog.mentor)),
        format!("{NOTES_HEADER}\n{notes}"),
    ];
    sections.join("\n\n")
}

// Catalog types are plain string structs; serialization cannot fail.
fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
