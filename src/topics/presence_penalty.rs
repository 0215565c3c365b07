use super::helper::QueryHelper;
use crate::notebook::{Block, NotebookError};

const INTRODUCTION: &str = r#"# Presence Penalty Parameter in LLMs

## Introduction
The presence_penalty parameter helps control repetition in model outputs by penalizing tokens that have already appeared in the text. This encourages the model to explore new topics and avoid getting stuck in repetitive patterns.

Key aspects:
- **Range**: Usually -2.0 to 2.0
- **Positive values**: Encourage the model to talk about new topics
- **Negative values**: Allow more repetition
- **Zero**: No penalty applied

Understanding presence_penalty is crucial for:
- Reducing redundant information
- Encouraging topic exploration
- Maintaining natural conversation flow"#;

const EXAMPLES: &str = r#"## Examples

Let's explore how different presence_penalty values affect the model's tendency to repeat information. We'll use a prompt that naturally invites repetition to demonstrate the impact."#;

const EXAMPLE_CODE: &str = r#"repetitive_prompt = "List 5 benefits of exercise. For each benefit, provide a detailed explanation."

print("Presence Penalty = -1.0 (More repetition allowed)")
print(query_ollama(repetitive_prompt, presence_penalty=-1.0))
print("\nPresence Penalty = 0.0 (Neutral)")
print(query_ollama(repetitive_prompt, presence_penalty=0.0))
print("\nPresence Penalty = 1.0 (Less repetition)")
print(query_ollama(repetitive_prompt, presence_penalty=1.0))"#;

const BEST_PRACTICES: &str = r#"## Best Practices

Choose presence_penalty based on your use case:

1. **High Penalty (0.7 to 2.0)**
   - Creative writing
   - Brainstorming sessions
   - Exploring diverse topics

2. **Medium Penalty (0.3 to 0.7)**
   - General conversation
   - Content generation
   - Explanations

3. **Low or Negative Penalty (-2.0 to 0.3)**
   - Technical documentation
   - When consistency is important
   - Formal writing

**Tips:**
- Start with presence_penalty = 0.0 and adjust based on needs
- Higher values can make outputs more diverse but potentially less focused
- Lower values maintain consistency but might lead to repetition
- Consider combining with frequency_penalty for fine-tuned control
- Monitor output quality when using extreme values"#;

pub(super) fn blocks() -> Result<Vec<Block>, NotebookError> {
    Ok(vec![
        Block::narrative(INTRODUCTION),
        QueryHelper::setting("presence_penalty", "0.0").to_block()?,
        Block::narrative(EXAMPLES),
        Block::example(EXAMPLE_CODE),
        Block::narrative(BEST_PRACTICES),
    ])
}
