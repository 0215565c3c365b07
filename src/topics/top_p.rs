use super::helper::QueryHelper;
use crate::notebook::{Block, NotebookError};

const INTRODUCTION: &str = r#"# Top-p (Nucleus Sampling) Parameter in LLMs

## Introduction
Top-p, also known as nucleus sampling, is a text generation parameter that helps control the randomness of the model's output by considering only the most likely tokens whose cumulative probability exceeds the specified top-p value.

- **Top-p = 0.1**: Very focused, considers only the most probable tokens
- **Top-p = 0.5**: Balanced, considers moderately probable tokens
- **Top-p = 1.0**: Considers all possible tokens

Unlike temperature, which scales probabilities, top-p truncates the probability distribution to only include the most likely tokens up to the cumulative probability threshold."#;

const EXAMPLES: &str = r#"## Examples

Let's explore how different top-p values affect the model's output. We'll use a creative writing prompt and observe the differences in token selection."#;

const EXAMPLE_CODE: &str = r#"creative_prompt = "List three possible uses for a magical crystal ball."

print("Top-p = 0.1 (Very focused)")
print(query_ollama(creative_prompt, top_p=0.1))
print("\nTop-p = 0.5 (Balanced)")
print(query_ollama(creative_prompt, top_p=0.5))
print("\nTop-p = 0.9 (More diverse)")
print(query_ollama(creative_prompt, top_p=0.9))"#;

const BEST_PRACTICES: &str = r#"## Best Practices

Choose top-p based on your use case:

1. **Low Top-p (0.1 - 0.3)**
   - Technical writing
   - Factual responses
   - When precision is crucial

2. **Medium Top-p (0.4 - 0.7)**
   - General conversation
   - Content generation
   - Balanced creativity and coherence

3. **High Top-p (0.8 - 1.0)**
   - Creative writing
   - Brainstorming
   - When diversity is important

**Tips:**
- Top-p can be used alongside temperature for fine-tuned control
- Start with top-p = 0.9 for general use cases
- Lower values create more predictable but potentially repetitive text
- Higher values allow for more creative but potentially less focused outputs"#;

pub(super) fn blocks() -> Result<Vec<Block>, NotebookError> {
    Ok(vec![
        Block::narrative(INTRODUCTION),
        QueryHelper::setting("top_p", "0.9").to_block()?,
        Block::narrative(EXAMPLES),
        Block::example(EXAMPLE_CODE),
        Block::narrative(BEST_PRACTICES),
    ])
}
