//! HTTP service for the todo API.
//!
//! `app` wires the routes over any `TodoStore`; `run` serves a router on a
//! bound listener until the shutdown future resolves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;
pub mod telemetry;

use std::{future::Future, time::Instant};

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

pub use config::{Config, StoreKind};
pub use error::StoreError;
pub use store::{MemoryStore, SqliteStore, TodoStore};

pub fn app<S: TodoStore>(store: S) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/todos",
            get(handlers::list_todos::<S>).post(handlers::create_todo::<S>),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo::<S>)
                .put(handlers::update_todo::<S>)
                .delete(handlers::delete_todo::<S>),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(store)
}

pub async fn run<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down");
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}
