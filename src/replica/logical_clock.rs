use std::fmt;

/// LamportClock is a scalar logical clock. It only ever moves forward.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) struct LamportClock(u64);

impl LamportClock {
    pub(crate) fn new(time: u64) -> Self {
        LamportClock(time)
    }

    pub(crate) fn as_u64(&self) -> u64 {
        self.0
    }

    /// Local event.
    pub(crate) fn tick(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Message receipt. Returns the post-merge value.
    pub(crate) fn merge(&mut self, other: u64) -> u64 {
        self.0 = self.0.max(other);
        self.0
    }
}

impl fmt::Debug for LamportClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
