//! Core traits shared across layers.

use crate::ClienteleResult;
use async_trait::async_trait;

/// Marker trait for domain entities with a typed identifier.
pub trait Entity {
    /// The entity's ID type.
    type Id;

    /// Returns the entity's identifier.
    fn id(&self) -> Self::Id;
}

/// Readiness probe for a customer store backend.
///
/// Implemented by each store so the REST layer can report whether the
/// configured backend is able to serve requests.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Verifies the store can serve requests.
    async fn check(&self) -> ClienteleResult<()>;
}
