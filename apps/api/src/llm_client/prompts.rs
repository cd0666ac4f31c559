// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments reused across those prompts.

/// Output discipline appended to every prompt whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Respond with a single JSON object and nothing else. \
Do NOT include any text before or after the JSON object. \
Do NOT use markdown code fences. \
Do NOT include explanations or apologies.";

/// Evidence rule shared by every extraction prompt.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
CRITICAL: Use only what is stated in the notes. Do NOT infer, interpolate, or invent details \
just to fill a section. If the notes do not support a section or criterion, leave it out.";
