use thiserror::Error;

use crate::input::Config;
use crate::time::Date;
use crate::verifier::Verifier;

pub struct VerifyCost;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CostMismatch {
    #[error("day {date} declares a cost of {declared}, but its activities sum to {actual}")]
    Daily {
        date: Date,
        declared: u32,
        actual: u32,
    },
    #[error("the plan declares a total cost of {declared}, but the days sum to {actual}")]
    Total { declared: u32, actual: u32 },
}

impl Verifier for VerifyCost {
    type Error = CostMismatch;
    type Errors = Vec<Self::Error>;

    fn verify(&self, config: &Config) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();
        let plan = config.plan();

        for day in plan.daily_plans() {
            let actual = day.activity_cost_total();
            if actual != day.estimated_daily_cost() {
                errors.push(CostMismatch::Daily {
                    date: day.date(),
                    declared: day.estimated_daily_cost(),
                    actual,
                });
            }
        }

        let actual = plan.daily_cost_total();
        if actual != plan.total_estimated_cost() {
            errors.push(CostMismatch::Total {
                declared: plan.total_estimated_cost(),
                actual,
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
