use std::fmt;
use std::fmt::Debug;

use crate::input::Config;

// relevant data from the plan:
// dates (range vs. duration_days)
// activity windows vs. duration_minutes
// costs (per day and total)
// hours annotations <- the interesting one

pub trait Verifier {
    type Error: fmt::Display + Debug + Sync + Send + 'static;
    type Errors: IntoIterator<Item = Self::Error>;

    fn verify(&self, config: &Config) -> Result<(), Self::Errors>;
}
