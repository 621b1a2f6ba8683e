pub mod controller;
pub mod presenter;
pub mod relay;
pub mod session;

pub use controller::{ ChatController, SendOutcome };
pub use presenter::{ MessageSink, TypingHandle, TypingOutcome, TypingPresenter };
pub use relay::RelayClient;
pub use session::Conversation;
