pub mod catalog;
pub mod live_game;
pub mod locator;
pub mod lookups;
pub mod report;
pub mod resolver;
pub mod roster;

#[cfg(test)]
pub(crate) mod fakes;

use std::future::Future;
use std::time::Duration;

use crate::errors::ApiError;

/// Bound a single external call; running out of time counts as a failed call
pub(crate) async fn with_timeout<T>(
    limit: Duration,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(ApiError::Timeout(limit)),
    }
}
