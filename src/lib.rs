pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod render;
pub mod server;

use cli::Args;
use config::prompt::resolve_system_prompt;
use llm::openrouter::OpenRouterClient;
use log::{ error, info };
use server::api::AppState;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    if args.api_key.trim().is_empty() {
        error!("OPENROUTER_API_KEY environment variable is NOT set!");
        return Err("OPENROUTER_API_KEY is required".into());
    }

    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.bind_addr());
    info!("Static Directory: {}", args.static_dir);
    info!("Upstream URL: {}", args.upstream_url);
    info!("Model: {}", args.model);
    info!("HTTP-Referer: {}", args.referer);
    info!("X-Title: {}", args.title);
    info!(
        "System Prompt: {}",
        args.system_prompt_path.as_deref().unwrap_or("built-in")
    );
    info!("-------------------------");

    let system_prompt = resolve_system_prompt(args.system_prompt_path.as_deref())?;
    let upstream = OpenRouterClient::from_config(&args.upstream_config())?;
    let state = AppState::new(Arc::new(upstream), system_prompt);

    let server = Server::new(&args, state);
    server.run().await?;

    Ok(())
}
