use super::helper::QueryHelper;
use crate::notebook::{Block, NotebookError};

const INTRODUCTION: &str = r#"# System Prompt Parameter in LLMs

## Introduction
The system prompt is a special instruction set that defines the model's behavior, personality, and operational constraints. It acts as a foundation for how the model should interpret and respond to subsequent user prompts.

Key aspects:
- **Persistence**: Affects all following interactions
- **Scope**: Can define roles, constraints, and behaviors
- **Priority**: Usually takes precedence over user prompts
- **Format**: Natural language instructions

Understanding system prompts is crucial for:
- Controlling model behavior
- Ensuring consistent responses
- Implementing safety guardrails
- Defining specialized roles"#;

const EXAMPLES: &str = r#"## Examples

Let's explore how different system prompts affect the model's behavior and responses. We'll use the same user prompt with different system prompts to demonstrate the impact."#;

const EXAMPLE_CODE: &str = r#"question = "What do you think about artificial intelligence?"

# Default behavior
print("Default (No system prompt):")
print(query_ollama(question))

# Technical expert
technical_system = "You are a technical expert in AI. Provide detailed, technical responses."
print("\nTechnical Expert:")
print(query_ollama(question, technical_system))

# Simplified explainer
simple_system = "You are an educator explaining concepts to beginners. Use simple language and analogies."
print("\nSimplified Explainer:")
print(query_ollama(question, simple_system))

# Critical perspective
critical_system = "You are a technology ethicist. Consider both benefits and potential risks."
print("\nCritical Perspective:")
print(query_ollama(question, critical_system))"#;

const BEST_PRACTICES: &str = r#"## Best Practices

Design system prompts based on your use case:

1. **Role Definition**
   - Be specific about expertise
   - Define communication style
   - Set knowledge boundaries

2. **Behavioral Control**
   - Establish response format
   - Define tone and personality
   - Set ethical guidelines

3. **Safety and Constraints**
   - Implement content filters
   - Define forbidden topics
   - Set output limitations

**Tips:**
- Keep system prompts clear and concise
- Test with various user inputs
- Layer instructions logically
- Include error handling guidance
- Document system prompts
- Regular validation and updates"#;

pub(super) fn blocks() -> Result<Vec<Block>, NotebookError> {
    let helper = QueryHelper::setting("system", "\"\"").description("a specific system prompt");

    Ok(vec![
        Block::narrative(INTRODUCTION),
        helper.to_block()?,
        Block::narrative(EXAMPLES),
        Block::example(EXAMPLE_CODE),
        Block::narrative(BEST_PRACTICES),
    ])
}
