use thiserror::Error;

use crate::input::Config;
use crate::time::{Date, TimeSpan};
use crate::verifier::Verifier;

pub struct VerifyDuration;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidDuration {
    #[error("`{activity}` on {date} declares {declared} minute(s), but {window} spans {actual}")]
    Mismatch {
        activity: String,
        date: Date,
        window: TimeSpan,
        declared: u32,
        actual: u32,
    },
    #[error("`{activity}` on {date} has an empty or inverted window: {window}")]
    EmptyWindow {
        activity: String,
        date: Date,
        window: TimeSpan,
    },
}

impl Verifier for VerifyDuration {
    type Error = InvalidDuration;
    type Errors = Vec<Self::Error>;

    fn verify(&self, config: &Config) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();

        for day in config.plan().daily_plans() {
            for activity in day.activities() {
                let window = activity.window();

                if window.end() <= window.start() {
                    errors.push(InvalidDuration::EmptyWindow {
                        activity: activity.name().to_string(),
                        date: day.date(),
                        window,
                    });
                    continue;
                }

                let actual = window.duration_minutes() as u32;
                if actual != activity.duration_minutes() {
                    errors.push(InvalidDuration::Mismatch {
                        activity: activity.name().to_string(),
                        date: day.date(),
                        window,
                        declared: activity.duration_minutes(),
                        actual,
                    });
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
