use std::path::Path;

use log::info;

use crate::hours::StatusKind;
use crate::input::Config;
use crate::utils;

#[must_use]
const fn badge(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Open => "[open]",
        StatusKind::Closed => "[closed]",
        StatusKind::Unknown => "[?]",
    }
}

pub struct ReportGenerator<'a> {
    config: &'a Config,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Renders the day-by-day plan with a status badge per activity.
    #[must_use]
    pub fn render(&self) -> String {
        let plan = self.config.plan();
        let policy = self.config.policy();
        let texts = self.config.texts();

        let mut out = String::new();

        out.push_str(&format!("Trip: {} ({})\n", plan.destination(), plan.theme()));
        out.push_str(&match plan.computed_duration_days() {
            Some(days) => format!(
                "Dates: {} to {} ({} day(s))\n",
                plan.start_date(),
                plan.end_date(),
                days
            ),
            None => format!(
                "Dates: {} to {} (inverted range)\n",
                plan.start_date(),
                plan.end_date()
            ),
        });

        for day in plan.daily_plans() {
            out.push('\n');
            out.push_str(&format!("{}  {}\n", day.date(), day.day_title()));

            for activity in day.activities() {
                let status = activity.business_status_with(policy, texts);

                out.push_str(&format!(
                    "  {}  {} {} ({})\n",
                    activity.window(),
                    badge(status.kind()),
                    activity.name(),
                    status.display()
                ));

                if let Some(cost) = activity.estimated_cost() {
                    out.push_str(&format!("      cost: ¥{}\n", cost));
                }

                if let (Some(km), Some(minutes)) = (
                    activity.distance_km_from_prev(),
                    activity.drive_time_min_from_prev(),
                ) {
                    out.push_str(&format!(
                        "      from previous: {:.2} km, {} min drive\n",
                        km, minutes
                    ));
                }
            }

            out.push_str(&format!("  day total: ¥{}\n", day.estimated_daily_cost()));
        }

        out.push('\n');
        out.push_str(&format!("total: ¥{}\n", plan.total_estimated_cost()));

        for tip in plan.general_tips() {
            out.push_str(&format!("tip: {}\n", tip));
        }

        out
    }

    pub fn generate(self, outpath: impl AsRef<Path>) -> anyhow::Result<()> {
        info!("rendering report to {}", outpath.as_ref().display());

        utils::write(outpath, self.render())?;

        info!("Done");

        Ok(())
    }
}
