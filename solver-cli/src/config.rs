use std::path::PathBuf;
use std::time::Duration;
use solver::sat_solver::Solver;

pub struct Config {
    pub input:       Option<String>,
    pub output:      Option<PathBuf>,
    pub return_code: bool,
    pub verify:      bool,
    pub time_limit:  Option<Duration>,
    pub solver:      Box<dyn Solver>,
}
