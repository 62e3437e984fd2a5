mod report;
mod utils;

pub mod hours;
pub mod input;
pub mod time;
pub mod verifier;

use std::fs;

use log::{info, warn};

use crate::input::Config;
use crate::report::ReportGenerator;
use crate::verifier::{DefaultVerifier, Verifier};

pub fn generate_report(config: &Config) -> anyhow::Result<()> {
    let plan = config.plan();
    info!(
        "plan: {} day(s) in {}",
        plan.duration_days(),
        plan.destination()
    );

    info!("rendering report from plan file");

    let generator = ReportGenerator::new(config);

    match config.output() {
        Some(output) => {
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }

            generator.generate(output)?;
        }
        None => print!("{}", generator.render()),
    }

    Ok(())
}

/// Runs every audit pass over the plan and logs each finding.
pub fn check_plan(config: &Config) -> anyhow::Result<()> {
    match DefaultVerifier.verify(config) {
        Ok(()) => {
            info!("no findings");
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                warn!("{}", error);
            }

            Err(anyhow::anyhow!("the plan has {} finding(s)", errors.len()))
        }
    }
}
