use solver::Solver;
use std::path::PathBuf;
use std::time::Duration;

pub struct Config {
    pub input:          PathBuf,
    pub solvers:        Vec<(String, Box<dyn Solver + Send>)>,
    pub output:         PathBuf,
    pub max_duration:   Duration,
}
