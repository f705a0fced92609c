//! Router assembly and server lifecycle.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::completion::CompletionClient;
use crate::handlers;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        AppState { completion }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/generate-exam", post(handlers::generate_exam))
        .route("/api/generate-summary", post(handlers::generate_summary))
        .route("/api/grade-exam", post(handlers::grade_exam))
        .route("/api/subjects", get(handlers::list_subjects))
        .route("/api/subjects/:id", get(handlers::get_subject))
        .route("/api/progress", get(handlers::progress))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // The browser UI is served from another origin.
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Serve until Ctrl-C or SIGTERM.
pub async fn run(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let router = build_router(state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
