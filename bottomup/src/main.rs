use bottomup_core::{
    FactorialError, List, StackBudget, StopWatch, dedup_sorted, factorial_iterative,
    factorial_recursive,
};
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools as _;
use std::{error::Error, fmt::Display, process::ExitCode};

const RECURSIVE_N: u64 = 20_000;
const ITERATIVE_N: u64 = 200_000_000;
const STACK_KIB: usize = 512;
const SAMPLE: [i64; 9] = [1, 1, 1, 1, 2, 3, 5, 5, 6];

/// Recursive vs bottom-up algorithms. Runs every demonstration when no
/// subcommand is given.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log more (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Time recursive and iterative factorial.
    Factorial(FactorialArgs),
    /// Collapse runs of equal values in an ascending sequence.
    Dedup(DedupArgs),
}

#[derive(clap::Args)]
struct FactorialArgs {
    /// n for the recursive strategy.
    #[arg(long, default_value_t = RECURSIVE_N)]
    recursive_n: u64,

    /// n for the iterative strategy.
    #[arg(long, default_value_t = ITERATIVE_N)]
    iterative_n: u64,

    /// Stack the recursion may use before it is cut off.
    #[arg(long, value_name = "KIB", default_value_t = STACK_KIB)]
    stack_kib: usize,
}

impl Default for FactorialArgs {
    fn default() -> Self {
        Self {
            recursive_n: RECURSIVE_N,
            iterative_n: ITERATIVE_N,
            stack_kib: STACK_KIB,
        }
    }
}

#[derive(clap::Args)]
struct DedupArgs {
    /// Ascending values, separated by commas or spaces.
    #[arg(
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = SAMPLE
    )]
    values: Vec<i64>,

    /// Which representation to run.
    #[arg(long, value_enum, default_value_t = Form::Both)]
    form: Form,
}

impl Default for DedupArgs {
    fn default() -> Self {
        Self {
            values: SAMPLE.to_vec(),
            form: Form::Both,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Form {
    Array,
    List,
    Both,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Command::Factorial(args)) => run_factorial(&args),
        Some(Command::Dedup(args)) => {
            run_dedup(&args);
            Ok(())
        }
        None => run_factorial(&FactorialArgs::default()).map(|()| {
            println!();
            run_dedup(&DedupArgs::default());
        }),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_factorial(args: &FactorialArgs) -> Result<(), Box<dyn Error>> {
    let mut watch = StopWatch::new("");
    let budget = StackBudget::from_kib(args.stack_kib);

    let n = args.recursive_n;
    let recursive = watch.time(format!("factorial_recursive({n}) time-consuming"), || {
        factorial_recursive(n, budget)
    })?;
    match recursive {
        Ok(value) => println!("factorial_recursive({n}) = {value}"),
        Err(FactorialError::StackExhausted {
            depth, used_bytes, ..
        }) => {
            tracing::info!(n, depth, used_bytes, "stack exhausted");
            println!("factorial_recursive({n}) aborted: stack exhausted at depth {depth}");
        }
        Err(err) => return Err(err.into()),
    }

    let n = args.iterative_n;
    let value = watch.time(format!("factorial_iterative({n}) time-consuming"), || {
        factorial_iterative(n)
    })?;
    println!("factorial_iterative({n}) = {value} (mod 2^64)");

    print!("{}", watch.pretty_print());
    Ok(())
}

fn run_dedup(args: &DedupArgs) {
    if args.values.iter().tuple_windows().any(|(a, b)| a > b) {
        tracing::warn!("input is not ascending, only adjacent duplicates collapse");
    }
    if matches!(args.form, Form::Array | Form::Both) {
        println!("array: {}", render_values(&dedup_sorted(&args.values)));
    }
    if matches!(args.form, Form::List | Form::Both) {
        let mut list: List<i64> = args.values.iter().copied().collect();
        list.dedup_sorted();
        tracing::debug!(
            before = args.values.len(),
            after = list.len(),
            "collapsed duplicate nodes"
        );
        println!("list:  {}", render_chain(&list));
    }
}

fn render_values<T: Display>(values: &[T]) -> String {
    values.iter().join(",")
}

fn render_chain<T: Display>(list: &List<T>) -> String {
    if list.is_empty() {
        "(empty)".to_owned()
    } else {
        list.iter().join(" -> ")
    }
}
