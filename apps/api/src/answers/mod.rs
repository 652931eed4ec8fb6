// Answer generation: remote model first, offline catalog as fallback.
// All remote calls go through llm_client; no direct Gemini calls here.

pub mod formatter;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;
pub mod validation;
