mod activity;
mod plan;

pub use activity::*;
pub use plan::*;
