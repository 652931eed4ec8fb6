// Prompt constants for remote answer generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Answer prompt template.
/// Replace: {role}, {question}, {memorability_instruction}
pub const ANSWER_PROMPT_TEMPLATE: &str = r#"{role} Generate a complete, well-structured answer for:

Question: {question}

Format your answer EXACTLY like this structure:

📝 **DEFINITION**
[Clear, concise 2-line definition]

🧠 **MEMORY TIP (Mnemonic)**
[Create a catchy acronym or phrase to remember key points]

🔑 **KEY POINTS** (Number each point)
1. [First main point with brief explanation]
2. [Second main point with brief explanation]
3. [Third main point with brief explanation]
4. [Fourth main point with brief explanation]

✅ **ADVANTAGES** (4 points)
1. [Advantage 1]
2. [Advantage 2]
3. [Advantage 3]
4. [Advantage 4]

🌍 **REAL-WORLD APPLICATIONS** (3 examples)
1. [Application 1]
2. [Application 2]
3. [Application 3]

💡 **EXAM TIP**
[One line tip for VTU exams - like "Always draw diagram" or "Mention time complexity"]

{memorability_instruction}"#;
