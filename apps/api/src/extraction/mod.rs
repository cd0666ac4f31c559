//! Extraction: free-text notes in, validated performance-review payload out.

pub mod composer;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod sanitizer;
pub mod validator;
