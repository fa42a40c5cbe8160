use tokio::time::Duration;

/// WallClock is the source of physical time for clock sync, in epoch milliseconds.
#[async_trait::async_trait]
pub trait WallClock: Send + Sync + 'static {
    fn now_millis(&self) -> i64;
    async fn sleep(&self, duration: Duration);
}

#[derive(Copy, Clone, Debug, Default)]
pub struct RealClock;

#[async_trait::async_trait]
impl WallClock for RealClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
pub(crate) use mock::{mocked_clock, MockClockController};
