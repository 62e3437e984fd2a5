use derive_more::Display;

use crate::hours::OpenInterval;
use crate::time::TimeSpan;
use crate::utils::StrExt;

/// How much of a raw opening-hours string survived parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Coverage {
    /// The input was empty or blank.
    #[display("empty")]
    Empty,
    /// At least one segment was skipped as unparseable.
    #[display("partial")]
    Partial,
    /// Every segment matched.
    #[display("full")]
    Full,
}

/// The parsed form of an upstream opening-hours string.
///
/// The upstream format is undocumented, so this keeps the raw text around
/// for display and tags the parse with a [`Coverage`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    raw: String,
    intervals: Vec<OpenInterval>,
    coverage: Coverage,
}

impl OpeningHours {
    /// Parses a free-form opening-hours string.
    ///
    /// Segments are separated by commas and/or whitespace and must match
    /// `HH:MM-HH:MM` (one or two hour digits, exactly two minute digits).
    /// Segments that do not match are skipped and demote the coverage to
    /// [`Coverage::Partial`]. This never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut intervals = Vec::new();
        let mut skipped = 0_usize;

        let segments = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|segment| !segment.is_empty());

        for segment in segments {
            match parse_segment(segment) {
                Some(interval) => intervals.push(interval),
                None => skipped += 1,
            }
        }

        let coverage = if intervals.is_empty() && skipped == 0 {
            Coverage::Empty
        } else if skipped > 0 {
            Coverage::Partial
        } else {
            Coverage::Full
        };

        Self {
            raw: raw.to_string(),
            intervals,
            coverage,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn intervals(&self) -> &[OpenInterval] {
        &self.intervals
    }

    #[must_use]
    pub const fn coverage(&self) -> Coverage {
        self.coverage
    }

    /// Whether the window is fully contained in a single open interval.
    ///
    /// Returns `None` when no interval is known. A window spanning the gap
    /// between two intervals is not open, even if their union covers it.
    #[must_use]
    pub fn is_open_for(&self, window: &TimeSpan) -> Option<bool> {
        if self.intervals.is_empty() {
            return None;
        }

        Some(self.intervals.iter().any(|interval| interval.contains(window)))
    }
}

fn parse_segment(segment: &str) -> Option<OpenInterval> {
    let [start, end] = segment.split_exact::<2>("-");

    let start = clock_minutes(start?)?;
    let end = clock_minutes(end?)?;

    Some(OpenInterval::new(start, end))
}

// `H:MM` or `HH:MM`, the minute must have exactly two digits
fn clock_minutes(time: &str) -> Option<u16> {
    let (hour, minute) = time.split_once(':')?;

    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }

    if !hour.bytes().all(|b| b.is_ascii_digit()) || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u16 = hour.parse().ok()?;
    let minute: u16 = minute.parse().ok()?;

    Some(hour * 60 + minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::time_stamp;

    fn intervals(raw: &str) -> Vec<(u16, u16)> {
        OpeningHours::parse(raw)
            .intervals()
            .iter()
            .map(|interval| (interval.start(), interval.end()))
            .collect()
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(intervals("09:00-18:00"), vec![(540, 1080)]);
        assert_eq!(OpeningHours::parse("09:00-18:00").coverage(), Coverage::Full);
    }

    #[test]
    fn test_single_digit_hour() {
        assert_eq!(intervals("9:00-18:00"), vec![(540, 1080)]);
    }

    #[test]
    fn test_overnight_segment() {
        assert_eq!(intervals("22:00-02:00"), vec![(1320, 1560)]);
    }

    #[test]
    fn test_comma_separated_segments() {
        assert_eq!(
            intervals("09:00-12:00,14:00-18:00"),
            vec![(540, 720), (840, 1080)]
        );
    }

    #[test]
    fn test_space_separated_segments() {
        assert_eq!(
            intervals("12:00-14:00 18:00-22:00"),
            vec![(720, 840), (1080, 1320)]
        );
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(
            intervals("09:00-12:00, 14:00-18:00"),
            vec![(540, 720), (840, 1080)]
        );
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(intervals("garbage"), vec![]);
        assert_eq!(OpeningHours::parse("garbage").coverage(), Coverage::Partial);

        assert_eq!(intervals(""), vec![]);
        assert_eq!(OpeningHours::parse("").coverage(), Coverage::Empty);
        assert_eq!(OpeningHours::parse("   ").coverage(), Coverage::Empty);
    }

    #[test]
    fn test_malformed_segments_are_skipped() {
        let hours = OpeningHours::parse("09:00-12:00, closed for lunch, 14:00-18:00");

        assert_eq!(
            hours
                .intervals()
                .iter()
                .map(|interval| (interval.start(), interval.end()))
                .collect::<Vec<_>>(),
            vec![(540, 720), (840, 1080)]
        );
        assert_eq!(hours.coverage(), Coverage::Partial);
    }

    #[test]
    fn test_minute_must_have_two_digits() {
        assert_eq!(intervals("09:0-18:00"), vec![]);
        assert_eq!(intervals("09:000-18:00"), vec![]);
    }

    #[test]
    fn test_is_open_for() {
        let hours = OpeningHours::parse("09:00-18:00");
        let window = TimeSpan::new(time_stamp!(10:00), time_stamp!(11:00));

        assert_eq!(hours.is_open_for(&window), Some(true));
    }

    #[test]
    fn test_gap_between_intervals_is_closed() {
        let hours = OpeningHours::parse("09:00-12:00,14:00-18:00");
        let window = TimeSpan::new(time_stamp!(11:30), time_stamp!(14:30));

        // covered by the union, but not by a single interval
        assert_eq!(hours.is_open_for(&window), Some(false));
    }

    #[test]
    fn test_unknown_without_intervals() {
        let window = TimeSpan::new(time_stamp!(10:00), time_stamp!(11:00));

        assert_eq!(OpeningHours::parse("").is_open_for(&window), None);
        assert_eq!(OpeningHours::parse("garbage").is_open_for(&window), None);
    }

    #[test]
    fn test_overnight_window_before_midnight() {
        let hours = OpeningHours::parse("22:00-02:00");

        assert_eq!(
            hours.is_open_for(&TimeSpan::new(time_stamp!(22:30), time_stamp!(23:30))),
            Some(true)
        );
        // the evaluation stays within one day, so a window after midnight
        // is compared against the un-shifted minutes and rejected
        assert_eq!(
            hours.is_open_for(&TimeSpan::new(time_stamp!(0:30), time_stamp!(1:30))),
            Some(false)
        );
    }
}
