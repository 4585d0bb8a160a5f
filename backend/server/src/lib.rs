//! # Lead Form Ingest
//!
//! Collects consultation requests (name, phone, consultation type) from the
//! lead form and appends each one as a row of a sheet.
//!
//!
//!
//! # Flow
//! - Form client validates locally and sends `POST /` with a JSON body
//! - Handler normalizes the payload, either form parameters or JSON
//! - Name, phone and consultation must be non-empty, otherwise nothing is written
//! - First write to an empty sheet adds the bold header row
//! - Row `[name, phone, consultation, timestamp]` is appended
//! - Every outcome is a JSON body carrying `success`
//!
//! `GET /` answers with a static health payload.
//!
//!
//!
//! # Storage
//!
//! `STORE_BACKEND=memory` keeps the sheet in process, handy for local runs.
//! `STORE_BACKEND=redis` keeps it in a Redis list, see [`database`].
//!
//!
//!
//! # Known Limitations
//! - No duplicate detection, a reload and resubmit gives a second row
//! - No auth and no rate limiting
//!
//!
//!
//! # Setup
//!
//! Run locally.
//! ```sh
//! RUST_LOG=info cargo run -p leadform
//! ```
//!
//! Try it.
//! ```sh
//! curl -X POST localhost:1111/ -H 'Content-Type: application/json' \
//!   -d '{"name":"Иван","phone":"+7 999 123 45 67","consultation":"дом"}'
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod routes;
pub mod state;
pub mod store;

use routes::{status_handler, submit_handler};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(state.config.cors_max_age_secs));

    Router::new()
        .route("/", get(status_handler).post(submit_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = match State::new().await {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize state: {e}");
            return;
        }
    };

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    let app = app(state);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
