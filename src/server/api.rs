use crate::config::prompt::SystemPrompt;
use crate::llm::CompletionUpstream;
use crate::models::chat::{ RelayErrorBody, RelayRequest };
use std::sync::Arc;
use axum::{
    routing::post,
    Router,
    Json,
    extract::{ State, rejection::JsonRejection },
    response::{ IntoResponse, Response },
    http::{ header, StatusCode },
};
use tower_http::cors::{ Any, CorsLayer };
use tower_http::services::ServeDir;
use log::{ debug, error, warn };

pub const UPSTREAM_FAILED: &str = "Upstream API failed.";

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn CompletionUpstream>,
    pub system_prompt: Arc<SystemPrompt>,
}

impl AppState {
    pub fn new(upstream: Arc<dyn CompletionUpstream>, system_prompt: SystemPrompt) -> Self {
        Self {
            upstream,
            system_prompt: Arc::new(system_prompt),
        }
    }
}

pub fn build_router(state: AppState, static_dir: Option<&str>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().route("/chat", post(chat_handler));
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors).with_state(state)
}

async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            warn!("Rejected /chat body: {}", rejection.body_text());
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayErrorBody::new(rejection.body_text())),
            ).into_response();
        }
    };

    debug!("Relaying conversation of {} messages", req.messages.len());
    let messages = state.system_prompt.prepend_to(&req.messages);

    match state.upstream.complete(messages).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        ).into_response(),
        Err(e) => {
            error!("Upstream error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayErrorBody::new(UPSTREAM_FAILED)),
            ).into_response()
        }
    }
}
