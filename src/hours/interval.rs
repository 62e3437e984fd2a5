use derive_more::Display;

use crate::hours::MINUTES_PER_DAY;
use crate::time::TimeSpan;

/// One continuous open period, in minutes since midnight.
///
/// `end` exceeds [`MINUTES_PER_DAY`] when the period crosses midnight,
/// for example `22:00-02:00` becomes `1320..1560`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{}..{}", start, end)]
pub struct OpenInterval {
    start: u16,
    end: u16,
}

impl OpenInterval {
    /// An `end` at or before `start` is interpreted as crossing midnight
    /// and gets a full day added, keeping `end > start`.
    #[must_use]
    pub fn new(start: u16, end: u16) -> Self {
        let end = if end <= start {
            end + MINUTES_PER_DAY
        } else {
            end
        };

        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> u16 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> u16 {
        self.end
    }

    /// Whether the window lies entirely inside this single interval.
    #[must_use]
    pub fn contains(&self, window: &TimeSpan) -> bool {
        window.start().as_minutes() >= self.start && window.end().as_minutes() <= self.end
    }
}
