//! Fixed prompt template wrapping the user's question

/// Default instructions for the support assistant
pub const CUSTOMER_SUPPORT_INSTRUCTIONS: &str = "\
You are a customer support assistant.

Your task:
- Answer the user's question clearly and concisely
- Be factual and helpful
- Do NOT hallucinate
- If you don't know the answer, say so politely

Return the answer in plain English.";

/// Instructions followed by the user's question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    instructions: String,
}

impl PromptTemplate {
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into().trim().to_string(),
        }
    }

    pub fn customer_support() -> Self {
        Self::new(CUSTOMER_SUPPORT_INSTRUCTIONS)
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Render the full prompt for a question
    pub fn render(&self, question: &str) -> String {
        format!(
            "{}\n\nUser question:\n{}\n",
            self.instructions,
            question.trim()
        )
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::customer_support()
    }
}
