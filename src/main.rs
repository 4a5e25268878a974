use std::{path::PathBuf, process};

use clap::{ArgAction, Parser};
use exprtree::{
    config::{Config, DEFAULT_MAX_DEPTH, TokenizeMode},
    read_expression, run, run_to_file,
};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// exprtree builds an expression tree from an infix integer expression over
/// the variable `x`, evaluates it, rewrites `x * A` into `A * x` and prints
/// the tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprtree to read the expression from the first line of a file
    /// instead of taking it from the command line.
    #[arg(short, long)]
    file: bool,

    /// The value bound to the variable `x`.
    #[arg(short = 'x', long = "value", default_value_t = 0, allow_negative_numbers = true)]
    value: i64,

    /// Writes the report to this file instead of standard output. The file is
    /// only created when the expression was processed successfully.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skips the `x * A` to `A * x` rewrite and renders the tree as parsed.
    #[arg(long)]
    no_transform: bool,

    /// Splits the expression on whitespace; every field must be one token.
    #[arg(long)]
    fields: bool,

    /// Whitespace-delimited tokens with literals limited to 1..=30.
    #[arg(long, conflicts_with_all = ["min", "max"])]
    strict: bool,

    /// Smallest accepted literal.
    #[arg(long, requires = "max")]
    min: Option<i64>,

    /// Largest accepted literal.
    #[arg(long, requires = "min")]
    max: Option<i64>,

    /// Maximum height of the expression tree.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increases log verbosity (-d, -dd, -ddd). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,

    /// The expression, or a path when `--file` is given.
    contents: String,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = if self.strict { Config::strict() } else { Config::default() };
        if self.fields {
            config = config.with_mode(TokenizeMode::Fields);
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            config = config.with_literal_range(min, max);
        }
        config.with_max_depth(self.max_depth)
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder().with_default_directive(level.into())
                                     .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    let expression = if args.file {
        read_expression(&args.contents).unwrap_or_else(|_| {
                                           eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                     &args.contents);
                                           process::exit(1);
                                       })
    } else {
        args.contents.clone()
    };

    let config = args.config();
    debug!(?config, "starting");

    let outcome = match &args.output {
        Some(path) => run_to_file(&expression, args.value, &config, !args.no_transform, path),
        None => run(&expression, args.value, &config, !args.no_transform),
    };

    match (outcome, &args.output) {
        (Ok(report), Some(_)) => println!("Result: {}", report.result),
        (Ok(report), None) => print!("{report}"),
        (Err(e), _) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
