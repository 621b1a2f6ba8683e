use chat_relay::cli::ChatArgs;
use chat_relay::client::{ ChatController, MessageSink, RelayClient, SendOutcome, TypingPresenter };
use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::error::Error;
use std::io::{ self, Write };
use std::sync::{ Arc, Mutex };
use std::time::Duration;
use tokio::io::{ AsyncBufReadExt, BufReader };

/// Writes a reply into the terminal as it is revealed.
///
/// A terminal cannot rewrite what it already printed, so only the characters
/// added since the last update are written.
struct TerminalSink {
    shown: Mutex<String>,
    show_markup: bool,
}

impl TerminalSink {
    fn new(show_markup: bool) -> Self {
        Self { shown: Mutex::new(String::new()), show_markup }
    }
}

impl MessageSink for TerminalSink {
    fn show_text(&self, text: &str) {
        let mut shown = match self.shown.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut out = io::stdout().lock();
        if text.starts_with(shown.as_str()) {
            let _ = write!(out, "{}", &text[shown.len()..]);
        } else {
            // Placeholder replaced by the reply or an error.
            let _ = write!(out, "\r\x1b[2K{}", text);
        }
        let _ = out.flush();
        *shown = text.to_string();
    }

    fn show_markup(&self, markup: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out);
        if self.show_markup {
            let _ = writeln!(out, "--- markup ---\n{}\n--------------", markup);
        }
        let _ = out.flush();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = ChatArgs::parse();

    let relay = RelayClient::new(&args.relay_url)?;
    info!("Talking to relay at {}", relay.endpoint());
    let presenter = TypingPresenter::new(Duration::from_millis(args.typing_interval_ms));
    let controller = ChatController::new(relay, presenter);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print!("You: ");
    io::stdout().flush()?;
    while let Some(line) = lines.next_line().await? {
        let sink = Arc::new(TerminalSink::new(args.show_markup));
        match controller.send(&line, sink).await {
            SendOutcome::Ignored => {}
            SendOutcome::Replied(handle) => {
                handle.wait().await;
            }
            SendOutcome::Failed(_) => println!(),
        }
        print!("You: ");
        io::stdout().flush()?;
    }
    println!();

    Ok(())
}
