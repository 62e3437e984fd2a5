use crate::input::Config;

mod verifier;
mod verify_cost;
mod verify_dates;
mod verify_duration;
mod verify_hours;

pub use verifier::Verifier;
pub use verify_cost::*;
pub use verify_dates::*;
pub use verify_duration::*;
pub use verify_hours::*;

pub struct DefaultVerifier;

impl Verifier for DefaultVerifier {
    type Error = anyhow::Error;
    type Errors = Vec<Self::Error>;

    // all passes run, the findings are collected instead of
    // stopping at the first pass that complains
    fn verify(&self, config: &Config) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();

        collect(&mut errors, VerifyDates.verify(config));
        collect(&mut errors, VerifyDuration.verify(config));
        collect(&mut errors, VerifyCost.verify(config));
        collect(&mut errors, VerifyHours.verify(config));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}

fn collect<E>(errors: &mut Vec<anyhow::Error>, result: Result<(), Vec<E>>)
where
    E: Into<anyhow::Error>,
{
    if let Err(new_errors) = result {
        errors.extend(new_errors.into_iter().map(Into::into));
    }
}
