use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use fibwatch_core::{measure, Measurement, NumberRange, Width};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod errors;
mod prompt;
mod report;

use errors::PromptError;
use prompt::Prompter;
use report::print_measurement;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WidthArg {
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

impl From<WidthArg> for Width {
    fn from(arg: WidthArg) -> Self {
        match arg {
            WidthArg::W32 => Width::W32,
            WidthArg::W64 => Width::W64,
        }
    }
}

#[derive(Parser, Debug)]
/// Time a naive recursive Fibonacci computation.
struct Opts {
    /// Index to compute; prompts on stdin when omitted
    #[arg(value_name = "N", allow_negative_numbers = true)]
    number: Option<i32>,

    /// Accept any integer instead of re-prompting until it is in range
    #[arg(long)]
    no_validate: bool,

    /// Smallest accepted index
    #[arg(long, default_value_t = NumberRange::DEFAULT.min, allow_negative_numbers = true)]
    min: i32,

    /// Largest accepted index
    #[arg(long, default_value_t = NumberRange::DEFAULT.max, allow_negative_numbers = true)]
    max: i32,

    /// Integer width used by the calculator
    #[arg(long, value_enum, default_value = "32")]
    width: WidthArg,

    /// Report elapsed time in fractional milliseconds
    #[arg(long)]
    precise: bool,
}

/// Read (or take) the index, time the computation and print the report.
fn run<R: BufRead, W: Write>(opts: &Opts, input: R, mut output: W) -> anyhow::Result<Measurement> {
    let range = NumberRange::new(opts.min, opts.max)
        .ok_or(PromptError::InvalidRange { min: opts.min, max: opts.max })?;
    let validate = !opts.no_validate;
    debug!(%range, validate, width = ?opts.width, "starting");

    let n = match opts.number {
        Some(value) if validate && !range.contains(value) => {
            return Err(PromptError::OutOfRange { value, range }.into());
        }
        Some(value) => value,
        None => Prompter::new(input, &mut output, range, validate).read_number()?,
    };
    writeln!(output)?;

    let m = measure(n, opts.width.into());
    info!(n = m.n, value = m.value, elapsed_ms = m.elapsed_ms, "measurement complete");

    print_measurement(&mut output, &m, opts.precise)?;
    Ok(m)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&opts, stdin.lock(), stdout.lock())?;

    Ok(())
}
