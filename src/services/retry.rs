use crate::models::error::AppError;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

const INITIAL_DELAY_MS: u32 = 100;
const BACKOFF_MULTIPLIER: u32 = 5;

/// Runs `operation` up to `max_attempts` times, backing off between tries.
/// Only `AppError::RateLimited` is retried.
pub async fn retry_with_backoff<F, Fut, T>(
    mut operation: F,
    max_attempts: u32,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    for attempt in 1..=max_attempts {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(AppError::RateLimited) if attempt < max_attempts => {
                let delay_ms = backoff_delay_ms(attempt);
                gloo::console::warn!(&format!(
                    "Rate limited, retrying in {}ms (attempt {}/{})",
                    delay_ms, attempt, max_attempts
                ));
                TimeoutFuture::new(delay_ms).await;
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::RateLimited)
}

/// Delay after the given (1-based) failed attempt
pub fn backoff_delay_ms(attempt: u32) -> u32 {
    INITIAL_DELAY_MS.saturating_mul(BACKOFF_MULTIPLIER.saturating_pow(attempt.saturating_sub(1)))
}
