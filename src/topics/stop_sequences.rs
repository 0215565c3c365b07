use super::helper::QueryHelper;
use crate::notebook::{Block, NotebookError};

const INTRODUCTION: &str = r#"# Stop Sequences Parameter in LLMs

## Introduction
Stop sequences are specific strings that tell the model when to stop generating text. They act as termination signals, allowing fine-grained control over where the model's output should end.

Key aspects:
- **Format**: Can be single characters, words, or phrases
- **Multiple stops**: Can specify multiple stop sequences
- **Case sensitivity**: Usually case-sensitive
- **Whitespace**: Handling depends on implementation

Understanding stop sequences is crucial for:
- Controlling output boundaries
- Maintaining format consistency
- Implementing structured outputs"#;

const EXAMPLES: &str = r#"## Examples

Let's explore how different stop sequences affect the model's output. We'll use various prompts and stop sequences to demonstrate their impact."#;

const LIST_EXAMPLE: &str = r#"list_prompt = "List the first 5 planets from the sun:\n1. Mercury\n2. Venus\n3."

print("No stop sequence:")
print(query_ollama(list_prompt))
print("\nStop at newline ('\n'):")
print(query_ollama(list_prompt, stop=["\n"]))
print("\nStop at number ('4.'):")
print(query_ollama(list_prompt, stop=["4."]))"#;

const QA_EXAMPLE: &str = r#"qa_prompt = "Q: What is machine learning?\nA: "

print("Stop at next question ('Q:'):")
print(query_ollama(qa_prompt, stop=["Q:"]))
print("\nStop at multiple sequences ('Q:' or '\n'):")
print(query_ollama(qa_prompt, stop=["Q:", "\n"]))"#;

const BEST_PRACTICES: &str = r#"## Best Practices

Choose stop sequences based on your use case:

1. **Structured Output**
   - Use delimiters like `###` or `===`
   - Consider using unique tokens
   - Match start/end patterns

2. **Conversational**
   - Use turn indicators (`User:`, `Assistant:`)
   - Consider newlines as stops
   - Use clear dialogue markers

3. **List Generation**
   - Use numbering patterns
   - Consider item separators
   - Use consistent formatting

**Tips:**
- Keep stop sequences unique and unambiguous
- Test stop sequences with sample outputs
- Consider case sensitivity
- Use multiple stop sequences when needed
- Be careful with common words as stops
- Document stop sequences for reproducibility"#;

pub(super) fn blocks() -> Result<Vec<Block>, NotebookError> {
    let helper = QueryHelper::setting("stop", "None")
        .description("specific stop sequences")
        .field("stop", "stop if stop else []");

    Ok(vec![
        Block::narrative(INTRODUCTION),
        helper.to_block()?,
        Block::narrative(EXAMPLES),
        Block::example(LIST_EXAMPLE),
        Block::example(QA_EXAMPLE),
        Block::narrative(BEST_PRACTICES),
    ])
}
