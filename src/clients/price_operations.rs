use crate::identity::CallerIdentity;
use crate::operations::{OperationRequest, PriceError};
use async_trait::async_trait;

/// The four price operations as seen by a hosting adapter.
///
/// Implementors provide [`execute`](PriceOperations::execute); the named
/// operations build the matching [`OperationRequest`] and delegate to it.
#[async_trait]
pub trait PriceOperations: Send + Sync {
    /// Runs one operation and returns its summary line.
    async fn execute(
        &self,
        identity: &CallerIdentity,
        request: OperationRequest,
    ) -> Result<String, PriceError>;

    /// Sets `price` on every id in the comma-separated `ids` list.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn update(&self, identity: &CallerIdentity, ids: &str, price: &str) -> Result<String, PriceError> {
        let request = OperationRequest::Update {
            ids: ids.to_string(),
            price: price.to_string(),
        };
        self.execute(identity, request).await
    }

    /// Adds a price for `sku`.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn insert(&self, identity: &CallerIdentity, sku: &str, price: &str) -> Result<String, PriceError> {
        let request = OperationRequest::Insert {
            sku: sku.to_string(),
            price: price.to_string(),
        };
        self.execute(identity, request).await
    }

    /// Deactivates every id in the comma-separated `ids` list.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete(&self, identity: &CallerIdentity, ids: &str) -> Result<String, PriceError> {
        let request = OperationRequest::Delete { ids: ids.to_string() };
        self.execute(identity, request).await
    }

    /// Brings every id in the comma-separated `ids` list back into use.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn reactivate(&self, identity: &CallerIdentity, ids: &str) -> Result<String, PriceError> {
        let request = OperationRequest::Reactivate { ids: ids.to_string() };
        self.execute(identity, request).await
    }
}
