use super::helper::QueryHelper;
use crate::notebook::{Block, NotebookError};

const INTRODUCTION: &str = r#"# Frequency Penalty Parameter in LLMs

## Introduction
The frequency_penalty parameter helps control the diversity of the model's output by penalizing tokens based on their frequency in the generated text. Unlike presence_penalty which penalizes tokens that appear at all, frequency_penalty scales its penalty based on how often tokens have been used.

Key aspects:
- **Range**: Usually -2.0 to 2.0
- **Positive values**: Decrease likelihood of frequent tokens
- **Negative values**: Increase likelihood of frequent tokens
- **Zero**: No frequency-based adjustments

Understanding frequency_penalty is crucial for:
- Controlling vocabulary diversity
- Managing writing style consistency
- Balancing repetition and variation"#;

const EXAMPLES: &str = r#"## Examples

Let's explore how different frequency_penalty values affect the model's word choice and vocabulary diversity. We'll use a prompt that naturally invites using similar vocabulary to demonstrate the impact."#;

const EXAMPLE_CODE: &str = r#"vocabulary_prompt = "Write a paragraph about artificial intelligence using technical terms."

print("Frequency Penalty = -1.0 (More repetition of terms)")
print(query_ollama(vocabulary_prompt, frequency_penalty=-1.0))
print("\nFrequency Penalty = 0.0 (Neutral)")
print(query_ollama(vocabulary_prompt, frequency_penalty=0.0))
print("\nFrequency Penalty = 1.0 (More diverse vocabulary)")
print(query_ollama(vocabulary_prompt, frequency_penalty=1.0))"#;

const BEST_PRACTICES: &str = r#"## Best Practices

Choose frequency_penalty based on your use case:

1. **High Penalty (0.7 to 2.0)**
   - Creative writing
   - Diverse vocabulary needs
   - Exploratory content

2. **Medium Penalty (0.3 to 0.7)**
   - General writing
   - Balanced vocabulary
   - Most conversational tasks

3. **Low or Negative Penalty (-2.0 to 0.3)**
   - Technical writing
   - Consistent terminology
   - Educational content

**Tips:**
- Start with frequency_penalty = 0.0 and adjust based on needs
- Higher values increase vocabulary diversity but may reduce precision
- Lower values maintain consistent terminology but might feel repetitive
- Can be used with presence_penalty for fine-tuned control
- Consider the domain-specific needs (technical vs creative)
- Monitor coherence when using extreme values"#;

pub(super) fn blocks() -> Result<Vec<Block>, NotebookError> {
    Ok(vec![
        Block::narrative(INTRODUCTION),
        QueryHelper::setting("frequency_penalty", "0.0").to_block()?,
        Block::narrative(EXAMPLES),
        Block::example(EXAMPLE_CODE),
        Block::narrative(BEST_PRACTICES),
    ])
}
