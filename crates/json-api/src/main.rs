//! Portal de Acessos API Server

use std::{process, time::Duration};

use salvo::{
    affix_state::inject,
    cors::{Any, Cors},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};

use ramal_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod agents;
mod auth;
mod config;
mod errors;
mod extensions;
mod frontend;
mod observability;
mod router;
mod shutdown;
mod state;
mod status;
#[cfg(test)]
mod test_helpers;

/// Portal de Acessos API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(source) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "observability failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability initialization error: {source}");
        }

        process::exit(1);
    }

    let insecure = config.auth.insecure_defaults();

    if !insecure.is_empty() {
        warn!(
            settings = %insecure.join(", "),
            "running with default credentials; set them before exposing this server"
        );
    }

    let app = match AppContext::new(
        config.airtable.to_airtable_config(),
        config.auth.admin_identity(),
        config.auth.signing_secret(),
    ) {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let state = State::shared(app, config.server.static_dir.clone());

    let router = router::app_router(&state)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(state));

    let cors = Cors::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .into_handler();

    let service = Service::new(router).hoop(cors);

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(service).await;

    info!("server stopped");
}
