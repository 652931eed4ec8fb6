// Shared prompt fragments.
// Each module that needs remote generation defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Role line that opens every remote prompt.
pub const EXAM_EXPERT_ROLE: &str = "You are a VTU Computer Science exam expert.";

/// Closing instruction appended to every answer prompt.
pub const MEMORABILITY_INSTRUCTION: &str =
    "Keep it concise but complete. Make it EASY TO REMEMBER for exams.";
