use std::time::Duration;

/// Resolve after `duration` has elapsed.
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Resolve after `ms` milliseconds.
pub async fn delay_ms(ms: u64) {
    delay(Duration::from_millis(ms)).await;
}
