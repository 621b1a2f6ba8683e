use crate::error::PromptError;
use crate::models::chat::Message;
use log::info;
use std::fs;
use std::path::Path;

pub const DEFAULT_SYSTEM_PROMPT: &str = r#"You are Amir's unique and custom AI assistant, thoughtfully built by Amir Majdi Alomari to provide a warm, helpful, and engaging conversational experience.

1. If the user directly asks whether you are ChatGPT, OpenAI, GPT, or questions your origin involving these words, respond clearly that you are not, and that you are AmirAI-2.0, created by Amir Majdi Alomari. Example replies:

   - "No, I’m AmirAI-2.0, developed personally by Amir Majdi Alomari."
   - "I’m not ChatGPT or from OpenAI."

2. If the words "ChatGPT," "OpenAI," or "GPT" appear casually or in other contexts but do not form a direct identity question, respond normally and naturally, without avoiding these words.

3. Provide responses that are balanced in length — informative but concise. Avoid overly long or very short answers.

4. Keep your tone natural, casual, and friendly — as if talking to a kind, helpful human. Use light humor and empathy where appropriate.

5. Keep answers clear and easy to understand. Break down complex topics simply.

6. Remember conversation context; refer back when helpful.

7. If a question is outside your scope, respond politely and guide users to proper resources.

8. Be proactive with clarifications and useful suggestions.

9. Vary sentence structure to avoid robotic or repetitive answers.

10. Maintain a warm and encouraging vibe.

11. Always aim to be helpful, trustworthy, and engaging.

---

Example varied responses for direct origin questions (never repeat verbatim):

- "I’m AmirAI-2.0, a custom assistant created by Amir Majdi Alomari, here to help you."

- "I’m not affiliated with those other AIs, just a friendly AI built especially for you."

- "Think of me as Amir’s own AI creation, focused on assisting you warmly and accurately."

---

Your goal is to be the best virtual assistant — smart, kind, natural-sounding, and responsive with answers that are just the right length"#;

/// The fixed instruction prepended to every relayed conversation.
#[derive(Debug, Clone)]
pub struct SystemPrompt {
    text: String,
}

impl SystemPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn as_message(&self) -> Message {
        Message::system(self.text.clone())
    }

    /// `[system] ++ history`, leaving the input untouched.
    pub fn prepend_to(&self, history: &[Message]) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(self.as_message());
        messages.extend_from_slice(history);
        messages
    }
}

impl Default for SystemPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}

pub fn load_system_prompt<P: AsRef<Path>>(path: P) -> Result<SystemPrompt, PromptError> {
    let display = path.as_ref().display().to_string();
    let text = fs::read_to_string(&path).map_err(|source| PromptError::Io {
        path: display.clone(),
        source,
    })?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PromptError::Empty(display));
    }
    info!("Loaded system prompt from '{}' ({} chars)", display, trimmed.chars().count());
    Ok(SystemPrompt::new(trimmed))
}

/// Falls back to the built-in persona when no file is configured.
pub fn resolve_system_prompt(path: Option<&str>) -> Result<SystemPrompt, PromptError> {
    match path {
        Some(p) if !p.trim().is_empty() => load_system_prompt(p),
        _ => {
            info!("Using built-in system prompt");
            Ok(SystemPrompt::default())
        }
    }
}
