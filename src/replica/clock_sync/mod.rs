mod berkeley;
mod synchronizer;
mod time;

pub use time::RealClock;
pub use time::WallClock;

#[cfg(test)]
pub(crate) use time::{mocked_clock, MockClockController};
