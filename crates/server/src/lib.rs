//! HTTP surface for mockbase.
//!
//! Exposes the three CRUD resources over axum:
//!
//! - `GET/POST /todos`, `PATCH/DELETE /todos/{id}`
//! - `GET/POST/PATCH/DELETE /sales` (id in the body for mutations)
//! - `GET/POST/PATCH/DELETE /kpis` (id in the body for mutations)
//!
//! Every failure maps onto the shared error taxonomy and comes back as
//! `{"error": "<message>"}`; handler panics are contained by a catch-panic
//! layer and surface as a generic 500.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tracing::{error, info};

use mockbase_core::Error;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;

/// Build the application router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/todos", get(handlers::todos::list).post(handlers::todos::create))
        .route(
            "/todos/{id}",
            patch(handlers::todos::update).delete(handlers::todos::remove),
        )
        .route(
            "/sales",
            get(handlers::sales::list)
                .post(handlers::sales::create)
                .patch(handlers::sales::update)
                .delete(handlers::sales::remove),
        )
        .route(
            "/kpis",
            get(handlers::kpis::list)
                .post(handlers::kpis::create)
                .patch(handlers::kpis::update)
                .delete(handlers::kpis::remove),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until ctrl-c or SIGTERM.
pub async fn serve(config: Config) -> std::io::Result<()> {
    let state = AppState::seeded();
    let app = router(state);

    let address = format!("{}:{}", config.addr, config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Convert an escaped handler panic into the generic 500 shape.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!("request handler panicked: {detail}");
    // The response deliberately carries no internal detail.
    ApiError::from(Error::internal("unexpected failure")).into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
        info!("received ctrl-c, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
        info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
