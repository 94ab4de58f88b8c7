//! Result type alias used across all layers.

use crate::ClienteleError;

/// Result type for all Clientele operations.
pub type ClienteleResult<T> = Result<T, ClienteleError>;
