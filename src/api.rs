use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    clients::webhook::WebhookClient,
    config::Config,
    models::{build::Build, envelope::PushEnvelope, error::HandleError},
    utils::{Outcome, process_build},
};

const BODY_LIMIT: usize = 1024 * 1024;

pub struct AppState {
    webhook: WebhookClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            webhook: WebhookClient::new(config),
        }
    }
}

pub async fn run_api_server(config: Config) -> Result<(), anyhow::Error> {
    let state = Arc::new(AppState::new(&config));

    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Build notification server started");

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", any(handle_push))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tracing::instrument(name = "serve", skip_all)]
async fn handle_push(state: State<Arc<AppState>>, request: Request<Body>) -> Response {
    match serve(&state, request).await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(err) => {
            error!(error = %err, "Request failed");
            err.into_response()
        }
    }
}

/// decode envelope -> decode build -> filter/format/deliver.
async fn serve(state: &AppState, request: Request<Body>) -> Result<Outcome, HandleError> {
    let body = axum::body::to_bytes(request.into_body(), BODY_LIMIT)
        .await
        .map_err(HandleError::Read)?;

    let envelope =
        PushEnvelope::decode(&body).map_err(|e| HandleError::DecodeEnvelope(e.into()))?;

    let payload = envelope
        .payload()
        .map_err(|e| HandleError::DecodeEnvelope(e.into()))?;
    let build = Build::decode(&payload).map_err(|e| HandleError::DecodeBuild(e.into()))?;

    info!(
        status = %build.status,
        build = %build.id,
        message_id = %envelope.message.id,
        subscription = %envelope.subscription,
        "Decoded build status event"
    );

    process_build(&build, &state.webhook).await
}
