use std::sync::Arc;
use std::time::Duration;
use log::{ debug, error };
use tokio::task::JoinHandle;
use tokio::time::{ interval_at, Instant, MissedTickBehavior };

use crate::render::render_markdown;

pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_millis(20);

/// The live element a reply is written into.
///
/// `show_text` replaces the element's content with plain text, `show_markup`
/// replaces it with rendered markup.
pub trait MessageSink: Send + Sync {
    fn show_text(&self, text: &str);
    fn show_markup(&self, markup: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingOutcome {
    Completed,
    Cancelled,
}

/// A running reveal. Cancelling stops it before the next character.
pub struct TypingHandle {
    task: JoinHandle<TypingOutcome>,
}

impl TypingHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn wait(self) -> TypingOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => {
                debug!("Typing cancelled");
                TypingOutcome::Cancelled
            }
            Err(e) => {
                error!("Typing task failed: {}", e);
                TypingOutcome::Cancelled
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TypingPresenter {
    interval: Duration,
}

impl Default for TypingPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_TYPING_INTERVAL)
    }
}

impl TypingPresenter {
    pub fn new(interval: Duration) -> Self {
        // A zero period would make tokio's interval panic.
        let interval = interval.max(Duration::from_millis(1));
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn present(&self, sink: Arc<dyn MessageSink>, reply: String) -> TypingHandle {
        let task = tokio::spawn(reveal(sink, reply, self.interval));
        TypingHandle { task }
    }
}

// Every tick is an await point, so an abort lands before the next character.
async fn reveal(sink: Arc<dyn MessageSink>, reply: String, period: Duration) -> TypingOutcome {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut revealed = String::with_capacity(reply.len());
    for c in reply.chars() {
        ticker.tick().await;
        revealed.push(c);
        sink.show_text(&revealed);
    }

    sink.show_markup(&render_markdown(&reply));
    TypingOutcome::Completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Shown {
        Text(String),
        Markup(String),
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<Shown>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<Shown> {
            self.events.lock().unwrap().clone()
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

    #[tokio::test(start_paused = true)]
    async fn reveals_one_char_per_tick_then_renders() {
        let sink = Arc::new(RecordingSink::default());
        let presenter = TypingPresenter::new(Duration::from_millis(20));

        let handle = presenter.present(sink.clone(), "*hi*".to_string());
        assert_eq!(handle.wait().await, TypingOutcome::Completed);

        assert_eq!(sink.events(), vec![
            Shown::Text("*".into()),
            Shown::Text("*h".into()),
            Shown::Text("*hi".into()),
            Shown::Text("*hi*".into()),
            Shown::Markup("<i>hi</i>".into()),
        ]);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_follow_the_interval() {
        let sink = Arc::new(RecordingSink::default());
        let presenter = TypingPresenter::new(Duration::from_millis(100));
        let start = Instant::now();

        let handle = presenter.present(sink.clone(), "abc".to_string());
        handle.wait().await;

        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn reveals_by_character_not_byte() {
        let sink = Arc::new(RecordingSink::default());
        let handle = TypingPresenter::default().present(sink.clone(), "日本".to_string());
        handle.wait().await;

        assert_eq!(sink.events()[0], Shown::Text("日".into()));
        assert_eq!(sink.events()[1], Shown::Text("日本".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_reply_completes_with_empty_markup() {
        let sink = Arc::new(RecordingSink::default());
        let handle = TypingPresenter::default().present(sink.clone(), String::new());
        assert_eq!(handle.wait().await, TypingOutcome::Completed);
        assert_eq!(sink.events(), vec![Shown::Markup(String::new())]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_before_final_render() {
        let sink = Arc::new(RecordingSink::default());
        let presenter = TypingPresenter::new(Duration::from_secs(1));

        let handle = presenter.present(sink.clone(), "a fairly long reply".to_string());
        tokio::time::sleep(Duration::from_millis(2500)).await;
        handle.cancel();
        assert_eq!(handle.wait().await, TypingOutcome::Cancelled);

        let events = sink.events();
        assert!(!events.is_empty());
        assert!(events.len() < "a fairly long reply".len());
        assert!(events.iter().all(|e| matches!(e, Shown::Text(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_reveals_stay_in_their_own_sink() {
        let first = Arc::new(RecordingSink::default());
        let second = Arc::new(RecordingSink::default());
        let presenter = TypingPresenter::new(Duration::from_millis(10));

        let a = presenter.present(first.clone(), "first reply".to_string());
        let b = presenter.present(second.clone(), "**second**".to_string());
        let (a, b) = tokio::join!(a.wait(), b.wait());
        assert_eq!((a, b), (TypingOutcome::Completed, TypingOutcome::Completed));

        for e in first.events() {
            match e {
                Shown::Text(t) => assert!("first reply".starts_with(&t)),
                Shown::Markup(m) => assert_eq!(m, "first reply"),
            }
        }
        for e in second.events() {
            match e {
                Shown::Text(t) => assert!("**second**".starts_with(&t)),
                Shown::Markup(m) => assert_eq!(m, "<b>second</b>"),
            }
        }
        assert_eq!(first.events().last(), Some(&Shown::Markup("first reply".into())));
        assert_eq!(second.events().last(), Some(&Shown::Markup("<b>second</b>".into())));
    }

    #[test]
    fn zero_interval_is_clamped() {
        assert_eq!(TypingPresenter::new(Duration::ZERO).interval(), Duration::from_millis(1));
    }
}
