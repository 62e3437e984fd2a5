use thiserror::Error;

use crate::hours::{Coverage, OpeningHours, StatusKind};
use crate::input::Config;
use crate::time::{Date, TimeSpan};
use crate::verifier::Verifier;

pub struct VerifyHours;

#[derive(Debug, Clone, Error)]
pub enum HoursConflict {
    #[error("`{activity}` on {date} falls outside the opening hours: {window} ({status})")]
    ClosedDuringVisit {
        activity: String,
        date: Date,
        window: TimeSpan,
        status: String,
    },
    #[error("`{activity}` on {date} has opening hours that only parsed partially: `{raw}`")]
    UnreadableHours {
        activity: String,
        date: Date,
        raw: String,
    },
}

impl Verifier for VerifyHours {
    type Error = HoursConflict;
    type Errors = Vec<Self::Error>;

    fn verify(&self, config: &Config) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();
        let policy = config.policy();

        for day in config.plan().daily_plans() {
            for activity in day.activities() {
                let status = activity.business_status_with(policy, config.texts());

                // Unknown is not a finding, the status is a hint and most
                // upstream data carries no hours at all
                if status.kind() == StatusKind::Closed {
                    errors.push(HoursConflict::ClosedDuringVisit {
                        activity: activity.name().to_string(),
                        date: day.date(),
                        window: activity.window(),
                        status: status.display().to_string(),
                    });
                }

                // a partially readable hours string degrades to Unknown in
                // the display, but is still worth surfacing in an audit
                if let Some(raw) = activity.open_hours() {
                    if OpeningHours::parse(raw).coverage() == Coverage::Partial {
                        errors.push(HoursConflict::UnreadableHours {
                            activity: activity.name().to_string(),
                            date: day.date(),
                            raw: raw.to_string(),
                        });
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
