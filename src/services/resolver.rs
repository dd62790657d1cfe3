use log::{info, warn};
use std::time::Duration;

use super::lookups::IdentityService;
use super::with_timeout;
use crate::domain::PlayerIdentity;
use crate::errors::{ApiError, LookupError, Stage};

/// Resolve a handle to the player's internal id. No retries.
pub async fn resolve_identity<S: IdentityService>(
    service: &S,
    handle: &str,
    timeout: Duration,
) -> Result<PlayerIdentity, LookupError> {
    let handle = handle.trim();
    if handle.is_empty() {
        return Err(LookupError::NotFound {
            handle: String::new(),
        });
    }

    let identity = with_timeout(timeout, service.resolve(handle))
        .await
        .map_err(|source| match source {
            ApiError::NotFound => LookupError::NotFound {
                handle: handle.to_string(),
            },
            other => {
                warn!("Identity lookup for {} failed: {}", handle, other);
                LookupError::unavailable(Stage::Identity, other)
            }
        })?;

    if identity.internal_id.is_empty() {
        return Err(LookupError::unavailable(
            Stage::Identity,
            ApiError::Malformed(format!("empty player id for {}", handle)),
        ));
    }

    info!("Resolved {} to {}", handle, identity.internal_id);
    Ok(identity)
}
