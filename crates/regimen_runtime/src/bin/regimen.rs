//! Regimen CLI entry point.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use regimen_engine::{DEFAULT_INDENT, DEFAULT_MAX_DEPTH};
use regimen_runtime::{
    DEFAULT_PLAN_PATH, OutputFormat, PlanSource, RunOptions, RuntimeError, Session, logging,
};

/// Render a random realization of an activity plan.
#[derive(Debug, Parser)]
#[command(name = "regimen", version)]
struct Cli {
    /// Plan file to read
    #[arg(default_value = DEFAULT_PLAN_PATH)]
    plan: PathBuf,

    /// Use the built-in example plan instead of a file
    #[arg(long)]
    example: bool,

    /// Definition to start from (defaults to the first one)
    #[arg(short, long)]
    root: Option<String>,

    /// Seed for a reproducible realization
    #[arg(short, long)]
    seed: Option<u64>,

    /// Deepest level a definition may be expanded at
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Indentation per nesting level
    #[arg(long, default_value = DEFAULT_INDENT)]
    indent: String,

    /// Number of realizations to produce
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the parsed plan in canonical form instead of resolving it
    #[arg(long)]
    print_plan: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,
}

impl Cli {
    fn source(&self) -> PlanSource {
        if self.example {
            PlanSource::Example
        } else {
            PlanSource::File(self.plan.clone())
        }
    }

    fn options(&self) -> RunOptions {
        let mut options = RunOptions::new()
            .with_max_depth(self.max_depth)
            .with_indent(self.indent.clone())
            .with_count(self.count as usize)
            .with_format(self.format);
        if let Some(root) = &self.root {
            options = options.with_root(root.clone());
        }
        if let Some(seed) = self.seed {
            options = options.with_seed(seed);
        }
        options
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    };

    if cli.pause {
        wait_for_enter();
    }
    code
}

fn run(cli: &Cli) -> Result<(), RuntimeError> {
    let session = Session::load(cli.source())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.print_plan {
        write!(out, "{}", session.plan())?;
    } else {
        session.run(&cli.options(), &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn print_error(error: &RuntimeError) {
    if io::stderr().is_terminal() {
        eprintln!("\x1b[31mError: {}\x1b[0m", error.report());
    } else {
        eprintln!("Error: {}", error.report());
    }
}

fn wait_for_enter() {
    eprint!("Press Enter to exit...");
    let _ = io::stderr().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
