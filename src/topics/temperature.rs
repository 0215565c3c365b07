use super::helper::QueryHelper;
use crate::notebook::{Block, NotebookError};

const INTRODUCTION: &str = r#"# Temperature Parameter in LLMs

## Introduction
Temperature is a crucial parameter in Large Language Models that controls the randomness and creativity of the model's outputs. It is typically set between 0 and 1, where:

- **Temperature = 0**: The model becomes deterministic, always choosing the most likely next token
- **Temperature = 1**: The model maintains the original probability distribution
- **Temperature > 1**: The model increases randomness, making all token probabilities more uniform

Think of temperature as a "creativity knob" - lower values make the model more focused and consistent, while higher values make it more creative and diverse."#;

const EXAMPLES: &str = r#"## Examples

Let's explore how different temperature values affect the model's output. We'll use a creative writing prompt and observe the differences."#;

const EXAMPLE_CODE: &str = r#"creative_prompt = "Write a one-sentence story about a mysterious door in the forest."

print("Temperature = 0.0 (Very focused)")
print(query_ollama(creative_prompt, temperature=0.0))
print("\nTemperature = 0.7 (Balanced)")
print(query_ollama(creative_prompt, temperature=0.7))
print("\nTemperature = 1.5 (Very creative)")
print(query_ollama(creative_prompt, temperature=1.5))"#;

const BEST_PRACTICES: &str = r#"## Best Practices

Choose temperature based on your use case:

1. **Low Temperature (0.0 - 0.3)**
   - Fact-based QA
   - Code generation
   - Logic problems
   - When consistency is crucial

2. **Medium Temperature (0.4 - 0.7)**
   - General conversation
   - Text summarization
   - Most default use cases

3. **High Temperature (0.8 - 1.5)**
   - Creative writing
   - Brainstorming
   - Generating diverse ideas
   - When uniqueness is valued

Remember: Higher temperature values increase diversity but may also increase the likelihood of errors or hallucinations."#;

pub(super) fn blocks() -> Result<Vec<Block>, NotebookError> {
    Ok(vec![
        Block::narrative(INTRODUCTION),
        QueryHelper::setting("temperature", "0.7").to_block()?,
        Block::narrative(EXAMPLES),
        Block::example(EXAMPLE_CODE),
        Block::narrative(BEST_PRACTICES),
    ])
}
