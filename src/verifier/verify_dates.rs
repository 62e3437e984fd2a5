use thiserror::Error;

use crate::input::Config;
use crate::time::Date;
use crate::verifier::Verifier;

pub struct VerifyDates;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DateMismatch {
    #[error("the plan's date range is inverted: {start} to {end}")]
    InvertedRange { start: Date, end: Date },
    #[error("the plan declares {declared} day(s), but {start} to {end} spans {actual}")]
    Duration {
        declared: u32,
        start: Date,
        end: Date,
        actual: i64,
    },
    #[error("day {date} is outside the trip range {start} to {end}")]
    DayOutsideRange { date: Date, start: Date, end: Date },
}

impl Verifier for VerifyDates {
    type Error = DateMismatch;
    type Errors = Vec<Self::Error>;

    fn verify(&self, config: &Config) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();
        let plan = config.plan();

        let start = plan.start_date();
        let end = plan.end_date();

        match plan.computed_duration_days() {
            None => errors.push(DateMismatch::InvertedRange { start, end }),
            Some(actual) => {
                if actual != plan.duration_days() as i64 {
                    errors.push(DateMismatch::Duration {
                        declared: plan.duration_days(),
                        start,
                        end,
                        actual,
                    });
                }
            }
        }

        for day in plan.daily_plans() {
            let date = day.date();
            if date < start || date > end {
                errors.push(DateMismatch::DayOutsideRange { date, start, end });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
