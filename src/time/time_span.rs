use derive_more::Display;

use crate::time::TimeStamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[display("{} - {}", start, end)]
pub struct TimeSpan {
    start: TimeStamp,
    end: TimeStamp,
}

impl TimeSpan {
    #[must_use]
    pub fn new(start: TimeStamp, end: TimeStamp) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> TimeStamp {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> TimeStamp {
        self.end
    }

    /// Minutes from start to end. Zero when the end is not after the start,
    /// the span never crosses midnight.
    #[must_use]
    pub fn duration_minutes(&self) -> u16 {
        self.end
            .as_minutes()
            .saturating_sub(self.start.as_minutes())
    }
}
