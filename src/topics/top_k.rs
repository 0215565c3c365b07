use super::helper::QueryHelper;
use crate::notebook::{Block, NotebookError};

const INTRODUCTION: &str = r#"# Top-k Parameter in LLMs

## Introduction
Top-k is a parameter that limits token selection to the k most likely next tokens. It provides direct control over the size of the candidate pool for next token selection, unlike top-p which works with cumulative probabilities.

- **Top-k = 1**: Only the single most probable token is considered (greedy)
- **Top-k = 10**: Consider only the 10 most probable tokens
- **Top-k = 50**: Consider the 50 most probable tokens

This parameter is particularly useful when you want explicit control over how many options the model considers at each step of text generation."#;

const EXAMPLES: &str = r#"## Examples

Let's explore how different top-k values affect the model's output. We'll use a creative task to demonstrate how limiting token selection impacts generation."#;

const EXAMPLE_CODE: &str = r#"creative_prompt = "Describe a futuristic city in one sentence."

print("Top-k = 1 (Most probable only)")
print(query_ollama(creative_prompt, top_k=1))
print("\nTop-k = 10 (Limited diversity)")
print(query_ollama(creative_prompt, top_k=10))
print("\nTop-k = 50 (More options)")
print(query_ollama(creative_prompt, top_k=50))"#;

const BEST_PRACTICES: &str = r#"## Best Practices

Choose top-k based on your use case:

1. **Low Top-k (1-5)**
   - When you need very focused, deterministic outputs
   - For tasks requiring high precision
   - When consistency is crucial

2. **Medium Top-k (10-20)**
   - For balanced text generation
   - When some variation is desired
   - For general conversation

3. **High Top-k (40-100)**
   - For creative writing
   - When exploring different possibilities
   - For brainstorming sessions

**Tips:**
- Can be combined with temperature and top-p
- Start with top-k = 40 for general use
- Lower values create more focused but potentially repetitive text
- Higher values allow for more diverse outputs but may include less relevant tokens"#;

pub(super) fn blocks() -> Result<Vec<Block>, NotebookError> {
    Ok(vec![
        Block::narrative(INTRODUCTION),
        QueryHelper::setting("top_k", "40").to_block()?,
        Block::narrative(EXAMPLES),
        Block::example(EXAMPLE_CODE),
        Block::narrative(BEST_PRACTICES),
    ])
}
