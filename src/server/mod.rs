pub mod api;

use crate::cli::Args;
use std::error::Error;
use std::net::SocketAddr;
use log::info;
use self::api::{ build_router, AppState };

pub struct Server {
    addr: String,
    state: AppState,
    static_dir: String,
}

impl Server {
    pub fn new(args: &Args, state: AppState) -> Self {
        Self {
            addr: args.bind_addr(),
            state,
            static_dir: args.static_dir.clone(),
        }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let addr = self.addr.parse::<SocketAddr>()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.addr, e))?;
        let app = build_router(self.state.clone(), Some(&self.static_dir));

        let listener = tokio::net::TcpListener::bind(addr).await
            .map_err(|e| format!("Failed to bind relay to {}: {}", addr, e))?;
        info!("Server running at http://localhost:{}", addr.port());

        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}
