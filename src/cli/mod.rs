use clap::Parser;
use crate::llm::{ UpstreamConfig, DEFAULT_MODEL, DEFAULT_REFERER, DEFAULT_TITLE, DEFAULT_UPSTREAM_URL };

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Interface the relay binds to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the relay listens on.
    #[arg(long, env = "PORT", default_value = "10000")]
    pub port: u16,

    /// Directory served as static assets (the chat page and its script).
    #[arg(long, env = "STATIC_DIR", default_value = ".")]
    pub static_dir: String,

    // --- Upstream Args ---
    /// API key for the upstream chat-completion API. Required.
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Full chat-completions URL of the upstream API.
    #[arg(long, env = "UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Model requested from the upstream API.
    #[arg(long, env = "MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Value of the HTTP-Referer attribution header.
    #[arg(long, env = "HTTP_REFERER", default_value = DEFAULT_REFERER)]
    pub referer: String,

    /// Value of the X-Title attribution header.
    #[arg(long, env = "X_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Optional text file holding the system prompt. Read once at startup.
    #[arg(long, env = "SYSTEM_PROMPT_PATH")]
    pub system_prompt_path: Option<String>,
}

impl Args {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig {
            api_key: self.api_key.clone(),
            base_url: self.upstream_url.clone(),
            model: self.model.clone(),
            referer: self.referer.clone(),
            title: self.title.clone(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Terminal chat client for the relay", long_about = None)]
pub struct ChatArgs {
    /// Relay endpoint to POST conversations to.
    #[arg(long, env = "RELAY_URL", default_value = "http://127.0.0.1:10000/chat")]
    pub relay_url: String,

    /// Delay between revealed characters, in milliseconds.
    #[arg(long, env = "TYPING_INTERVAL_MS", default_value = "20")]
    pub typing_interval_ms: u64,

    /// Print the rendered markup once a reply has been revealed.
    #[arg(long, env = "SHOW_MARKUP", default_value = "false")]
    pub show_markup: bool,
}
