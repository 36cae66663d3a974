mod config;
mod plotting;

use clap::{App, Arg};
use config::Config;
use log::info;
use plotting::plot_runtimes;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use solver::{
    solvers::{TimeLimitedSolver, TimedSolver},
    IndexOrderBranching, JeroslawWang, LocalSearchSolver, NaiveBranching, SATSolution,
    SatisfactionSolver, Solver, CNF,
};
use std::{
    collections::BTreeMap,
    error::Error,
    fs::File,
    io::prelude::*,
    path::{Path, PathBuf},
    time::Duration,
};

fn make_config() -> Result<Config, Box<dyn Error>> {
    let matches = App::new("satisfaction benchmarking")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("Racing pit for SAT solvers")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .required(true)
                .help("Directory of testing cases"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(false)
                .help("Output file for plot"),
        )
        .arg(
            Arg::with_name("time")
                .short("t")
                .long("time")
                .takes_value(true)
                .required(false)
                .default_value("60")
                .help("Timeout for a single instance in seconds"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .default_value("0")
                .help("Seed of the local search solvers"),
        )
        .get_matches();

    let seed = matches.value_of("seed").unwrap_or("0").parse::<u64>()
        .map_err(|e| format!("invalid seed: {}", e))?;
    let max_duration = matches.value_of("time").unwrap_or("60").parse::<u64>()
        .map_err(|e| format!("invalid time limit: {}", e))?;

    let solvers: Vec<(String, Box<dyn Solver + Send>)> = vec![
        // Brute too expensive
        (
            "naive".to_string(),
            Box::new(SatisfactionSolver::new(NaiveBranching)),
        ),
        (
            "index".to_string(),
            Box::new(SatisfactionSolver::new(IndexOrderBranching)),
        ),
        (
            "Jeroslaw-Wang".to_string(),
            Box::new(SatisfactionSolver::new(JeroslawWang::default())),
        ),
        (
            "GSAT".to_string(),
            Box::new(LocalSearchSolver::gsat().with_seed(seed)),
        ),
        (
            "WalkSAT".to_string(),
            Box::new(LocalSearchSolver::walksat().with_seed(seed)),
        ),
    ];

    Ok(Config {
        input: matches.value_of("input").map(PathBuf::from).ok_or("no input directory")?,
        output: PathBuf::from(matches.value_of("output").unwrap_or("out.svg")),
        solvers,
        max_duration: Duration::from_secs(max_duration),
    })
}

/// Reads every `.cnf` file of `dir`, in file name order.
fn load_files(dir: &Path) -> Result<Vec<CNF>, Box<dyn Error>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "cnf") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        let mut buffer = String::new();
        File::open(&path)?.read_to_string(&mut buffer)?;
        let formula = CNF::from_dimacs(&buffer)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        out.push(formula)
    }
    Ok(out)
}

/// Durations of the instances solved within `max_duration`.
fn run_tests(
    formulae: &[CNF],
    solver: impl Solver,
    max_duration: Duration,
) -> Vec<Duration> {
    let solver = TimedSolver::new(TimeLimitedSolver::new(solver, max_duration));
    formulae
        .iter()
        .filter_map(|formula| {
            let (duration, outcome) = solver.solve_timed(formula);
            match outcome.solution {
                SATSolution::Unknown => None,
                _ => Some(duration),
            }
        })
        .collect()
}

/// Number of instances solved one after another, fastest first, in `budget`.
fn count_within(durations: &[Duration], budget: Duration) -> usize {
    let mut sorted = durations.to_vec();
    sorted.sort();

    let mut total = Duration::from_secs(0);
    sorted.into_iter()
        .take_while(|duration| {
            total += *duration;
            total <= budget
        })
        .count()
}

/// Returns a vector of test results; for each solver duration on each test
fn run_benchmark(
    formulae: Vec<CNF>,
    solvers: Vec<(String, Box<dyn Solver + Send>)>,
    max_duration: Duration,
) -> BTreeMap<String, Vec<Duration>> {
    solvers
        .into_par_iter()
        .map(|(name, solver)| {
            info!("Started {}", &name);
            let result = run_tests(&formulae, solver, max_duration);
            info!(
                "Finished {}: solved {} of {} instances, {} of them within {}s in total",
                &name,
                result.len(),
                formulae.len(),
                count_within(&result, max_duration),
                max_duration.as_secs()
            );
            (name, result)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = make_config()?;
    let test_formulae = load_files(&config.input)?;
    info!("Loaded {} formulae from {}", test_formulae.len(), config.input.display());

    let benchmarks = run_benchmark(test_formulae, config.solvers, config.max_duration);

    for (name, durations) in benchmarks.iter() {
        println!("{}: {} solved", name, durations.len());
    }

    plot_runtimes(&benchmarks, &config.output, (600, 480))?;
    info!("Plot written to {}", config.output.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn count_within_takes_the_fastest_first() {
        let durations = vec![5, 50, 1, 3].into_iter().map(Duration::from_secs).collect::<Vec<_>>();
        assert_eq!(count_within(&durations, Duration::from_secs(9)), 3);
        assert_eq!(count_within(&durations, Duration::from_secs(0)), 0);
        assert_eq!(count_within(&[], Duration::from_secs(60)), 0);
    }

    #[test]
    fn only_solved_instances_are_timed() {
        let formulae = vec![
            CNF::from_literals(1, vec![vec![1], vec![-1]]).unwrap(),
            CNF::from_literals(2, vec![vec![1, 2]]).unwrap(),
        ];
        let complete = run_tests(&formulae, SatisfactionSolver::new(NaiveBranching), Duration::from_secs(10));
        assert_eq!(complete.len(), 2);

        // local search cannot refute the first formula
        let incomplete = run_tests(&formulae, LocalSearchSolver::walksat(), Duration::from_secs(10));
        assert_eq!(incomplete.len(), 1);
    }
}
