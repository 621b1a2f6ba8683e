#![allow(dead_code)]

use axum::Router;
use chat_relay::client::MessageSink;
use std::net::SocketAddr;
use std::sync::Mutex;

/// Serves `app` on an ephemeral localhost port for the rest of the test.
pub async fn spawn_router(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });
    addr
}

/// A port nothing is listening on.
pub async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Text(String),
    Markup(String),
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Shown>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<Shown> {
        self.events.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Shown> {
        self.events().last().cloned()
    }
}

impl MessageSink for RecordingSink {
    fn show_text(&self, text: &str) {
        self.events.lock().unwrap().push(Shown::Text(text.to_string()));
    }

    fn show_markup(&self, markup: &str) {
        self.events.lock().unwrap().push(Shown::Markup(markup.to_string()));
    }
}
