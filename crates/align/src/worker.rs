//! Map request worker
//!
//! Pulls raw requests off a stream, runs each one through the map service on
//! its own task and publishes exactly one result per request. The number of
//! requests being mapped at once is bounded by a semaphore.

use std::sync::Arc;

use align_application::ports::MapServiceInterface;
use align_domain::error::{Error, Result};
use align_domain::value_objects::MapResult;
use align_providers::transport::{InboundRequest, NatsMapTransport};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// Destination for map results
#[async_trait]
pub trait ResultPublisher: Send + Sync + 'static {
    /// Publish `result` for a request that carried `reply`
    async fn publish(&self, reply: Option<&str>, result: &MapResult) -> Result<()>;
}

#[async_trait]
impl ResultPublisher for NatsMapTransport {
    async fn publish(&self, reply: Option<&str>, result: &MapResult) -> Result<()> {
        self.publish_result(reply, result).await
    }
}

/// Concurrent request processor
#[derive(Clone)]
pub struct MapWorker {
    service: Arc<dyn MapServiceInterface>,
    limit: Arc<Semaphore>,
    max_in_flight: usize,
}

impl MapWorker {
    /// Create a worker mapping at most `max_in_flight` requests at once
    pub fn new(service: Arc<dyn MapServiceInterface>, max_in_flight: usize) -> Self {
        let max_in_flight = max_in_flight.max(1);
        Self {
            service,
            limit: Arc::new(Semaphore::new(max_in_flight)),
            max_in_flight,
        }
    }

    /// Concurrency limit
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Process requests until the stream ends, returning how many were handled
    ///
    /// Waits for in-flight requests to publish before returning.
    pub async fn run<S>(&self, mut requests: S, publisher: Arc<dyn ResultPublisher>) -> Result<usize>
    where
        S: Stream<Item = InboundRequest> + Unpin,
    {
        info!(max_in_flight = self.max_in_flight, "map worker started");

        let mut tasks = JoinSet::new();
        let mut handled = 0usize;

        while let Some(request) = requests.next().await {
            let permit = Arc::clone(&self.limit)
                .acquire_owned()
                .await
                .map_err(|e| Error::internal(format!("worker semaphore closed: {e}")))?;
            handled += 1;

            let service = Arc::clone(&self.service);
            let publisher = Arc::clone(&publisher);
            tasks.spawn(async move {
                let _permit = permit;
                process(service.as_ref(), publisher.as_ref(), request).await;
            });

            while let Some(joined) = tasks.try_join_next() {
                log_join(joined);
            }
        }

        while let Some(joined) = tasks.join_next().await {
            log_join(joined);
        }

        info!(handled, "request stream closed");
        Ok(handled)
    }
}

impl std::fmt::Debug for MapWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapWorker")
            .field("max_in_flight", &self.max_in_flight)
            .finish_non_exhaustive()
    }
}

async fn process(
    service: &dyn MapServiceInterface,
    publisher: &dyn ResultPublisher,
    request: InboundRequest,
) {
    let result = service.handle_payload(&request.payload).await;
    debug!(
        project_id = %result.project_id,
        request_id = %result.request_id,
        success = result.success,
        mappings = result.mappings_created,
        "map request handled"
    );

    if let Err(e) = publisher.publish(request.reply.as_deref(), &result).await {
        error!(
            project_id = %result.project_id,
            request_id = %result.request_id,
            error = %e,
            "failed to publish map result"
        );
    }
}

fn log_join(joined: std::result::Result<(), tokio::task::JoinError>) {
    if let Err(e) = joined {
        error!(error = %e, "map task failed");
    }
}
