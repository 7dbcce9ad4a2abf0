//! `netinv serve`: seed the store, bind, and run until a shutdown signal.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use netinv_api::ApiServer;
use netinv_config::Config;
use netinv_core::DeviceStore;

use crate::cli::ServeArgs;
use crate::error::CliError;

pub async fn handle(args: ServeArgs, mut config: Config) -> Result<(), CliError> {
    apply_overrides(&mut config, args);

    let store = DeviceStore::with_devices(config.seed_devices()?).map_err(CliError::SeedRejected)?;
    info!(devices = store.len().map_err(CliError::Store)?, "inventory loaded");

    let api_config = config.api_config();
    let addr = api_config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| CliError::Bind {
            addr: addr.clone(),
            source,
        })?;

    ApiServer::new(api_config, Arc::new(store))
        .run(listener, shutdown_signal())
        .await
        .map_err(CliError::Server)
}

/// CLI flags take precedence over file and environment.
fn apply_overrides(config: &mut Config, args: ServeArgs) {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.sample_devices {
        config.inventory.sample_devices = true;
    }
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
