mod config;

use clap::{App, Arg, ArgMatches};
use config::Config;
use log::info;
use solver::{
    solvers::{TimeLimitedSolver, TimedSolver},
    FlipPolicy, LocalSearchParams, LocalSearchSolver,
    SATSolution::{Satisfiable, Unknown, Unsatisfiable},
};
use solver::{check_valuation, Bruteforce, Gsat, SatisfactionSolver, Solver, WalkSat, CNF};
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;
use std::time::Duration;

fn make_config() -> Result<Config, Box<dyn Error>> {
    let matches = App::new("satisfaction")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("A tool to satisfy all your desires (or prove they are impossible)")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .help("Input file"),
        )
        .arg(
            Arg::with_name("algorithm")
                .long("algorithm")
                .value_name("ALGORITHM")
                .help("SAT solving algorithm")
                .takes_value(true)
                .possible_values(&["bruteforce", "dpll", "gsat", "walksat"])
                .default_value("dpll"),
        )
        .arg(
            Arg::with_name("dpll-branching")
                .long("dpll-branching")
                .help("DPLL branching strategy")
                .possible_values(&["naive", "index", "Jeroslaw-Wang"])
                .default_value("Jeroslaw-Wang"),
        )
        .arg(
            Arg::with_name("max-tries")
                .long("max-tries")
                .takes_value(true)
                .help("Local search restarts (defaults depend on the algorithm)"),
        )
        .arg(
            Arg::with_name("max-flips")
                .long("max-flips")
                .takes_value(true)
                .help("Local search flips per try"),
        )
        .arg(
            Arg::with_name("p-random")
                .long("p-random")
                .takes_value(true)
                .help("Probability of a random local search move"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .default_value("0")
                .help("Seed of the local search random generator"),
        )
        .arg(
            Arg::with_name("time-limit")
                .long("time-limit")
                .short("t")
                .takes_value(true)
                .help("Give up with UNKNOWN after this many seconds"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("File name for output in DIMACS format"),
        )
        .arg(
            Arg::with_name("verify")
                .long("verify")
                .help("Checks a satisfying valuation against the formula before printing it"),
        )
        .arg(
            Arg::with_name("return_code")
                .long("return-code")
                .short("r")
                .help("Will return 10 if satisfiable and 20 if unsatisfiable (useful for scripting)")
                .takes_value(false),
        )
        .get_matches();

    let solver: Box<dyn Solver> = match matches.value_of("algorithm") {
        Some("bruteforce") => Box::new(Bruteforce::Bruteforce),
        Some("dpll") => match matches.value_of("dpll-branching") {
            Some("naive") => Box::new(SatisfactionSolver::new(solver::NaiveBranching)),
            Some("index") => Box::new(SatisfactionSolver::new(solver::IndexOrderBranching)),
            Some("Jeroslaw-Wang") => Box::new(SatisfactionSolver::new(solver::JeroslawWang::default())),
            _ => unreachable!(), // already handled by clap
        },
        Some("gsat") => Box::new(local_search(Gsat, &matches)?),
        Some("walksat") => Box::new(local_search(WalkSat, &matches)?),
        _ => unreachable!(), // already handled by clap
    };

    Ok(Config {
        input: matches.value_of("input").map(String::from),
        output: matches.value_of("output").map(PathBuf::from),
        return_code: matches.is_present("return_code"),
        verify: matches.is_present("verify"),
        time_limit: parse_time_limit(&matches)?,
        solver,
    })
}

fn parse_time_limit(matches: &ArgMatches) -> Result<Option<Duration>, Box<dyn Error>> {
    match parse_arg::<f64>(matches, "time-limit")? {
        Some(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(Some(Duration::from_secs_f64(seconds))),
        Some(seconds) => Err(format!("time limit must be a non-negative number of seconds, got {}", seconds).into()),
        None => Ok(None),
    }
}

/// Local search with the policy's defaults replaced by the given flags.
fn local_search<P: FlipPolicy>(policy: P, matches: &ArgMatches) -> Result<LocalSearchSolver<P>, Box<dyn Error>> {
    let defaults = policy.default_params();
    let params = LocalSearchParams {
        max_tries: parse_arg(matches, "max-tries")?.unwrap_or(defaults.max_tries),
        max_flips: parse_arg(matches, "max-flips")?.unwrap_or(defaults.max_flips),
        p_random: parse_arg(matches, "p-random")?.unwrap_or(defaults.p_random),
    };
    if !(0.0..=1.0).contains(&params.p_random) {
        return Err(format!("p-random must lie in [0, 1], got {}", params.p_random).into());
    }
    let seed = parse_arg(matches, "seed")?.unwrap_or(0);

    Ok(LocalSearchSolver::new(policy).with_params(params).with_seed(seed))
}

fn parse_arg<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Error + 'static,
{
    match matches.value_of(name) {
        Some(value) => value.parse()
            .map(Some)
            .map_err(|e| format!("invalid value '{}' for --{}: {}", value, name, e).into()),
        None => Ok(None),
    }
}

fn get_input(handle: &mut impl Read) -> io::Result<String> {
    let mut buffer = String::new();
    handle.read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = make_config()?;

    let input = match config.input {
        None => {
            info!("No input file specified. Reading from standard input...");
            get_input(&mut io::stdin())
        }
        Some(file) => get_input(&mut File::open(&file)?),
    }?;

    let formula = CNF::from_dimacs(&input)?;
    info!("Read {} clauses over {} variables", formula.len(), formula.num_variables);

    let solver = match config.time_limit {
        Some(limit) => Box::new(TimeLimitedSolver::new(config.solver, limit)) as Box<dyn Solver>,
        None => config.solver,
    };
    let (duration, outcome) = TimedSolver::new(solver).solve_timed(&formula);
    let solution = outcome.solution;

    if config.verify {
        if let Satisfiable(valuation) = &solution {
            if !check_valuation(&formula, valuation) {
                return Err("the valuation found does not satisfy the formula".into());
            }
            info!("Valuation verified");
        }
    }

    let report = format!(
        "{}{}\nc time: {:.3}\n",
        solution.to_dimacs(),
        outcome.statistics,
        duration.as_secs_f64()
    );
    match config.output {
        Some(path) => std::fs::write(path, report)?,
        None => print!("{}", report),
    }

    if config.return_code {
        match solution {
            Satisfiable(_) => exit(10),
            Unsatisfiable => exit(20),
            Unknown => (),
        }
    } else if solution.is_unknown() {
        exit(2)
    }
    Ok(())
}
