use std::sync::Arc;
use log::{ info, warn };
use tokio::sync::Mutex;

use super::presenter::{ MessageSink, TypingHandle, TypingPresenter };
use super::relay::RelayClient;
use super::session::Conversation;
use crate::models::chat::{ Message, RelayReply };

pub const TYPING_PLACEHOLDER: &str = "Assistant is typing...";
pub const NO_RESPONSE: &str = "Sorry, I couldn't get a response.";

pub enum SendOutcome {
    /// Blank input; nothing was sent.
    Ignored,
    /// The reply is being revealed into the sink.
    Replied(TypingHandle),
    /// The sink shows this error text and the history gained no assistant turn.
    Failed(String),
}

/// Owns one chat session: its history, the relay it talks to and how replies are shown.
#[derive(Clone)]
pub struct ChatController {
    conversation: Arc<Mutex<Conversation>>,
    relay: RelayClient,
    presenter: TypingPresenter,
}

impl ChatController {
    pub fn new(relay: RelayClient, presenter: TypingPresenter) -> Self {
        Self {
            conversation: Arc::new(Mutex::new(Conversation::new())),
            relay,
            presenter,
        }
    }

    pub async fn history(&self) -> Vec<Message> {
        self.conversation.lock().await.messages().to_vec()
    }

    /// Sends `text` and writes the outcome into `sink`.
    ///
    /// Each call works only on the sink it was given, so overlapping sends
    /// never write into each other's message.
    pub async fn send(&self, text: &str, sink: Arc<dyn MessageSink>) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        let snapshot = {
            let mut conversation = self.conversation.lock().await;
            conversation.push_user(text);
            conversation.messages().to_vec()
        };
        sink.show_text(TYPING_PLACEHOLDER);

        let failure = match self.relay.send(&snapshot).await {
            Ok(RelayReply::Content(reply)) => {
                self.conversation.lock().await.push_assistant(reply.clone());
                info!("Received reply ({} chars)", reply.chars().count());
                return SendOutcome::Replied(self.presenter.present(sink, reply));
            }
            Ok(RelayReply::Error(e)) => format!("Error: {}", e),
            Ok(RelayReply::Empty) => NO_RESPONSE.to_string(),
            Err(e) => format!("⚠️ Error: {}", e),
        };

        warn!("Chat send failed: {}", failure);
        sink.show_text(&failure);
        SendOutcome::Failed(failure)
    }
}
