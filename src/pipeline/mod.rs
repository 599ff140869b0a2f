//! # The price pipeline
//!
//! Every operation runs the same four steps:
//!
//! 1. derive the display name ([`crate::identity`])
//! 2. validate the input ([`crate::validation`])
//! 3. apply the mutation ([`invoker`])
//! 4. compose the summary ([`summary`])
//!
//! Validation failures stop before the store is touched. There are no
//! retries and nothing is cached between calls.
//!
//! All collaborators are passed in when the [`Pipeline`] is built, so tests
//! can swap the store and the clock.

pub mod invoker;
pub mod summary;

pub use summary::{Clock, FixedClock, SystemClock};

use crate::identity::CallerIdentity;
use crate::operations::{OperationRequest, PriceError};
use crate::runtime::{ConfigError, PriceOpsConfig};
use crate::store::{Connector, Statement};
use crate::validation;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The store, clock and configuration one invocation needs.
#[derive(Clone)]
pub struct Pipeline {
    connector: Arc<dyn Connector>,
    clock: Arc<dyn Clock>,
    config: PriceOpsConfig,
}

impl Pipeline {
    /// Fails if `config` does not pass [`PriceOpsConfig::validate`].
    pub fn new(connector: impl Connector, config: PriceOpsConfig) -> Result<Self, ConfigError> {
        Self::with_clock(connector, config, SystemClock)
    }

    pub fn with_clock(
        connector: impl Connector,
        config: PriceOpsConfig,
        clock: impl Clock,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            connector: Arc::new(connector),
            clock: Arc::new(clock),
            config,
        })
    }

    pub fn config(&self) -> &PriceOpsConfig {
        &self.config
    }

    /// Runs one operation end to end and returns its summary.
    ///
    /// Blocks while the store call is in flight.
    pub fn run(&self, identity: &CallerIdentity, request: &OperationRequest) -> Result<String, PriceError> {
        let kind = request.kind();
        let user_name = identity.display_name();
        debug!(operation = %kind, ?request, user_name = %user_name, "Price mutation requested");

        if let Err(e) = validation::validate(request) {
            if let PriceError::InvalidInput { field, raw_value } = &e {
                debug!(operation = %kind, %field, raw_value = raw_value.as_str(), "Rejected value");
                warn!(operation = %kind, %field, error = %e, "Price mutation rejected");
            }
            return Err(e);
        }

        let statement = Statement::for_request(&self.config, request, &user_name);
        let rows_affected = invoker::invoke(self.connector.as_ref(), kind, &statement)?;

        let at = summary::civil_time(self.clock.now(), self.config.time_zone);
        info!(operation = %kind, rows_affected, user_name = %user_name, "Price mutation applied");
        Ok(summary::compose(&user_name, rows_affected, kind, at))
    }
}
