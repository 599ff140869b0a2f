use crate::clients::PriceOperations;
use crate::identity::CallerIdentity;
use crate::operations::{OperationRequest, PriceError};
use crate::pipeline::{Clock, Pipeline};
use crate::runtime::{ConfigError, PriceOpsConfig};
use crate::store::Connector;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

/// Runs price operations against a store.
///
/// Each call gets its own connection on the blocking pool; calls share no
/// state, so a `PriceClient` can be cloned and used concurrently.
#[derive(Clone)]
pub struct PriceClient {
    pipeline: Arc<Pipeline>,
}

impl PriceClient {
    /// Fails if `config` does not pass [`PriceOpsConfig::validate`].
    pub fn new(connector: impl Connector, config: PriceOpsConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_pipeline(Pipeline::new(connector, config)?))
    }

    /// Same as [`PriceClient::new`] with configuration read from the environment.
    pub fn from_env(connector: impl Connector) -> Result<Self, ConfigError> {
        Self::new(connector, PriceOpsConfig::from_env()?)
    }

    pub fn with_clock(
        connector: impl Connector,
        config: PriceOpsConfig,
        clock: impl Clock,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_pipeline(Pipeline::with_clock(connector, config, clock)?))
    }

    pub fn from_pipeline(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn config(&self) -> &PriceOpsConfig {
        self.pipeline.config()
    }
}

#[async_trait]
impl PriceOperations for PriceClient {
    async fn execute(
        &self,
        identity: &CallerIdentity,
        request: OperationRequest,
    ) -> Result<String, PriceError> {
        let kind = request.kind();
        let pipeline = self.pipeline.clone();
        let identity = identity.clone();
        debug!(operation = %kind, "Dispatching to blocking pool");

        tokio::task::spawn_blocking(move || pipeline.run(&identity, &request))
            .await
            .map_err(|e| {
                error!(operation = %kind, error = %e, "Price task failed");
                PriceError::mutation_failed(kind, e)
            })?
    }
}
