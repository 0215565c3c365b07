use super::helper::QueryHelper;
use crate::notebook::{Block, NotebookError};

const INTRODUCTION: &str = r#"# Max Tokens Parameter in LLMs

## Introduction
The max_tokens parameter controls the maximum length of the model's output in tokens. It acts as a safety limit to prevent unnecessarily long responses and helps manage computational resources.

Key aspects:
- **Token**: A piece of text (usually 3-4 characters in English)
- **Default**: Usually model-specific (e.g., 2048 for many models)
- **Range**: From 1 to model's context window size

Understanding max_tokens is crucial for:
- Controlling response length
- Managing API costs
- Ensuring consistent output sizes"#;

const EXAMPLES: &str = r#"## Examples

Let's explore how different max_tokens values affect the model's output length. We'll use the same prompt with different token limits to demonstrate the impact."#;

const EXAMPLE_CODE: &str = r#"summary_prompt = "Explain how neural networks work."

print("Max Tokens = 20 (Very brief)")
print(query_ollama(summary_prompt, max_tokens=20))
print("\nMax Tokens = 50 (Concise)")
print(query_ollama(summary_prompt, max_tokens=50))
print("\nMax Tokens = 200 (Detailed)")
print(query_ollama(summary_prompt, max_tokens=200))"#;

const BEST_PRACTICES: &str = r#"## Best Practices

Choose max_tokens based on your use case:

1. **Short Responses (10-30 tokens)**
   - Quick answers
   - Single-sentence responses
   - Command generation

2. **Medium Responses (50-100 tokens)**
   - Paragraphs
   - Brief explanations
   - Summaries

3. **Long Responses (200+ tokens)**
   - Detailed explanations
   - Content generation
   - Complex analysis

**Tips:**
- Always set max_tokens to prevent runaway generation
- Consider token costs in production environments
- Remember that max_tokens is an upper limit, not a target
- Balance between completeness and conciseness
- Account for different languages (some use more tokens per word)"#;

pub(super) fn blocks() -> Result<Vec<Block>, NotebookError> {
    // Ollama calls this limit num_predict.
    let helper = QueryHelper::setting("max_tokens", "100").field(
        "num_predict",
        "max_tokens  # Ollama uses num_predict for max_tokens",
    );

    Ok(vec![
        Block::narrative(INTRODUCTION),
        helper.to_block()?,
        Block::narrative(EXAMPLES),
        Block::example(EXAMPLE_CODE),
        Block::narrative(BEST_PRACTICES),
    ])
}
