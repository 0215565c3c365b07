//! Markdown rendering of prompt/response examples.
//!
//! Query failures are shown as text in place of the response; nothing here
//! returns a [`QueryError`](crate::query::QueryError).

use std::io::{self, Write};

use crate::query::{GenerationOptions, MemoryProbe, OllamaClient, Transport};

/// Queries the model and renders the example as Markdown.
///
/// Output layout:
///
/// ```text
/// ### {title}
///
/// **Prompt:**
/// {prompt}
///
/// **System Prompt:**      (only when given)
/// {system_prompt}
///
/// **Response:**
/// {response or warning}
/// ```
pub fn render_example<T: Transport, M: MemoryProbe>(
    client: &OllamaClient<T, M>,
    title: &str,
    prompt: &str,
    system_prompt: Option<&str>,
) -> String {
    let system_prompt = system_prompt.filter(|s| !s.is_empty());

    let mut options = GenerationOptions::new();
    if let Some(system) = system_prompt {
        options = options.system(system);
    }

    let response = client.query_text(prompt, options);
    format_example(title, prompt, system_prompt, &response)
}

/// Writes [`render_example`] output followed by a newline.
pub fn display_example<T: Transport, M: MemoryProbe, W: Write>(
    client: &OllamaClient<T, M>,
    out: &mut W,
    title: &str,
    prompt: &str,
    system_prompt: Option<&str>,
) -> io::Result<()> {
    let rendered = render_example(client, title, prompt, system_prompt);
    writeln!(out, "{}", rendered)
}

fn format_example(title: &str, prompt: &str, system_prompt: Option<&str>, response: &str) -> String {
    let mut sections = vec![
        format!("### {}", title),
        format!("**Prompt:**\n{}", prompt),
    ];
    if let Some(system) = system_prompt {
        sections.push(format!("**System Prompt:**\n{}", system));
    }
    sections.push(format!("**Response:**\n{}", response));
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_without_system_prompt() {
        let text = format_example("Greeting", "Say hi", None, "Hi!");
        assert_eq!(
            text,
            "### Greeting\n\n**Prompt:**\nSay hi\n\n**Response:**\nHi!"
        );
    }

    #[test]
    fn test_format_with_system_prompt() {
        let text = format_example("Pirate", "Say hi", Some("Talk like a pirate."), "Ahoy!");
        assert!(text.contains("**System Prompt:**\nTalk like a pirate.\n\n**Response:**\nAhoy!"));
    }
}
