use super::helper::seed_helper_block;
use crate::notebook::{Block, NotebookError};

const INTRODUCTION: &str = r#"# Seed Parameter in LLMs

## Introduction
The seed parameter is a crucial tool for achieving reproducibility in LLM outputs. It controls the randomness in the model's generation process, allowing you to get consistent results across multiple runs with the same input.

Key aspects:
- **Determinism**: Same seed + same prompt = same output
- **Testing**: Essential for debugging and validation
- **Experimentation**: Enables controlled comparisons
- **Quality Assurance**: Helps in maintaining output consistency

Understanding seed management is important for:
- Debugging model behavior
- Scientific experiments
- Quality assurance testing
- Production deployments requiring consistency"#;

const EXAMPLES: &str = r#"## Examples

Let's explore how seeds affect model outputs by running the same prompt multiple times with different seed configurations."#;

const EXAMPLE_CODE: &str = r#"prompt = "Write a short story about a robot learning to paint."

# No seed (random outputs)
print("Without seed (Run 1):")
print(query_ollama(prompt))
print("\nWithout seed (Run 2):")
print(query_ollama(prompt))

# Fixed seed (consistent outputs)
seed_value = 42
print(f"\nWith seed {seed_value} (Run 1):")
print(query_ollama(prompt, seed_value))
print(f"\nWith seed {seed_value} (Run 2):")
print(query_ollama(prompt, seed_value))

# Different seed value
different_seed = 123
print(f"\nWith different seed {different_seed}:")
print(query_ollama(prompt, different_seed))"#;

const REPRODUCIBILITY: &str = r#"## Testing Reproducibility

Let's demonstrate how seeds can be used for testing and debugging by comparing outputs across different prompts and configurations."#;

const REPRODUCIBILITY_CODE: &str = r#"# Test different prompts with same seed
test_seed = 42
prompts = [
    "Explain quantum computing",
    "Write a haiku about spring",
    "Describe a sunset"
]

for prompt in prompts:
    print(f"Prompt: {prompt}")
    print("First run:")
    print(query_ollama(prompt, test_seed))
    print("\nSecond run (should be identical):")
    print(query_ollama(prompt, test_seed))
    print("\n" + "-"*50 + "\n")"#;

const BEST_PRACTICES: &str = r#"## Best Practices

1. **Development and Testing**
   - Use fixed seeds during development
   - Document seed values in test cases
   - Verify reproducibility across environments

2. **Production Deployment**
   - Consider when to use fixed seeds
   - Balance consistency vs. diversity
   - Implement seed management strategy

3. **Experimentation**
   - Use seeds for A/B testing
   - Control for randomness in experiments
   - Document seed values for reproducibility

**Tips:**
- Always log seed values used in production
- Use different seeds for different use cases
- Consider seed ranges for controlled variation
- Document seed-dependent behaviors
- Test with multiple seed values
- Include seed management in monitoring"#;

pub(super) fn blocks() -> Result<Vec<Block>, NotebookError> {
    Ok(vec![
        Block::narrative(INTRODUCTION),
        seed_helper_block()?,
        Block::narrative(EXAMPLES),
        Block::example(EXAMPLE_CODE),
        Block::narrative(REPRODUCIBILITY),
        Block::example(REPRODUCIBILITY_CODE),
        Block::narrative(BEST_PRACTICES),
    ])
}
