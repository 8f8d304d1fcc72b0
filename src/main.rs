//! Sort integers from a text file with a chosen classic algorithm
//!
//! Reads the first N bytes of the input file, sorts the integers found there
//! with bubble, quick, shell or slow sort, reports the sort time and writes
//! the result to the output file. Selections not given as flags are asked for
//! interactively.

use std::io;
use std::process;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use classic_sort::{
    args::SortArgs,
    config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE},
    error::SortResult,
    sort,
};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("classic-sort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let args = parse_args_from_matches(&matches);

    init_logging(args.debug);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let config = args.resolve(&mut stdin.lock(), &mut stdout.lock())?;

    sort(&config)
}

fn build_cli() -> Command {
    Command::new("classic-sort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort integers from a text file with bubble, quick, shell or slow sort")
        .long_about("Sort the whitespace-separated integers found in the first N bytes of a .txt file.\n\nAny of --algorithm, --direction and --bytes that is not given is asked for on standard input.")
        .arg(Arg::new("algorithm")
            .short('a')
            .long("algorithm")
            .help("Sort method: 1/bubble, 2/quick, 3/shell, 4/slow")
            .value_name("METHOD"))
        .arg(Arg::new("direction")
            .short('d')
            .long("direction")
            .help("Sort direction: 1/asc for ascending, anything else descending")
            .value_name("DIR"))
        .arg(Arg::new("bytes")
            .short('b')
            .long("bytes")
            .help("Number of bytes to read from the input file")
            .value_name("N")
            .allow_hyphen_values(true))
        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .help("Input file, must end in .txt")
            .value_name("FILE")
            .default_value(DEFAULT_INPUT_FILE))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Output file for the sorted values")
            .value_name("FILE")
            .default_value(DEFAULT_OUTPUT_FILE))
        .arg(Arg::new("debug")
            .long("debug")
            .help("Log diagnostics to stderr")
            .action(ArgAction::SetTrue))
}

fn parse_args_from_matches(matches: &clap::ArgMatches) -> SortArgs {
    SortArgs {
        algorithm: matches.get_one::<String>("algorithm").cloned(),
        direction: matches.get_one::<String>("direction").cloned(),
        bytes: matches.get_one::<String>("bytes").cloned(),
        input: matches.get_one::<String>("input").cloned(),
        output: matches.get_one::<String>("output").cloned(),
        debug: matches.get_flag("debug"),
    }
}

/// Diagnostics go to stderr; stdout carries prompts and results
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
