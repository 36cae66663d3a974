mod flip_policy;
mod gsat;
mod walksat;

pub use flip_policy::FlipPolicy;
pub use gsat::{steepest_gain, Gsat};
pub use walksat::{least_unsatisfied, WalkSat};
