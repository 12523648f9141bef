//! Worker startup
//!
//! Loads configuration, installs logging, wires the map service and runs the
//! NATS worker until the request stream closes or Ctrl-C is received.

use std::path::Path;
use std::sync::Arc;

use align_infrastructure::bootstrap::init_app;
use align_infrastructure::config::{AppConfig, ConfigLoader};
use align_infrastructure::logging::init_logging;
use align_providers::transport::NatsMapTransport;
use tracing::info;

use crate::worker::MapWorker;

/// Run the map worker
pub async fn run(
    config_path: Option<&Path>,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path, log_level)?;
    init_logging(&config.logging)?;

    let context = init_app(config)?;
    let nats = context.config.nats.to_transport_config();

    info!(
        url = %nats.url,
        request_subject = %nats.request_subject,
        result_subject = %nats.result_subject,
        queue_group = %nats.queue_group,
        "Starting Align map worker"
    );

    let transport = Arc::new(NatsMapTransport::connect(nats).await?);
    let requests = transport.requests().await?;
    let worker = MapWorker::new(context.map_service(), context.config.worker.max_in_flight);

    tokio::select! {
        outcome = worker.run(requests, transport.clone()) => {
            outcome?;
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received");
        }
    }

    transport.flush().await?;
    info!("Align map worker stopped");
    Ok(())
}

/// Load configuration from an optional path, applying a log level override
pub fn load_config(
    config_path: Option<&Path>,
    log_level: Option<&str>,
) -> align_domain::error::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;
    if let Some(level) = log_level {
        config.logging.level = level.to_string();
    }
    Ok(config)
}
