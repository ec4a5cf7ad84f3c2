//! Interactive root separation and refinement of `4cos(x) + 0.3x`.
//!
//! Prompts for a partition count until the user is satisfied with the
//! brackets, then refines every bracket with all four methods and prints a
//! diagnostic block per method.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rootscan::root_finding::algorithms::Algorithm;
use rootscan::root_finding::config::ConvergenceParams;
use rootscan::root_finding::errors::SeparationError;
use rootscan::root_finding::function::{CosineDrift, Differentiable};
use rootscan::root_finding::interval::Interval;
use rootscan::root_finding::report::{BracketReport, RefinementOutcome};
use rootscan::root_finding::separation::separate_roots;
use rootscan::root_finding::survey::refine_brackets;


#[derive(Parser, Debug)]
#[command(about = "Separate and refine the roots of f(x) = 4cos(x) + 0.3x.")]
struct Args {
    /// Left end of the search segment.
    #[arg(long, default_value_t = CosineDrift::LOW, allow_negative_numbers = true)]
    low: f64,

    /// Right end of the search segment.
    #[arg(long, default_value_t = CosineDrift::HIGH, allow_negative_numbers = true)]
    high: f64,

    /// Stopping tolerance for every method.
    #[arg(long, default_value_t = 1e-5)]
    tolerance: f64,

    /// Number of segment partitions. Prompts interactively when omitted.
    #[arg(short = 'n', long)]
    partitions: Option<usize>,

    /// Iteration cap for every method (default: 200 newton, 300 secant,
    /// theoretical bound for bisection).
    #[arg(long)]
    max_iter: Option<usize>,

    /// Smallest admissible |f'(x)| or |f(x_1) - f(x_0)|.
    #[arg(long, default_value_t = 1e-15)]
    derivative_floor: f64,

    /// Root multiplicity used by modified newton.
    #[arg(short, long, default_value_t = 1)]
    multiplicity: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn params(&self) -> Result<ConvergenceParams> {
        let mut params = ConvergenceParams::new()
            .set_tolerance(self.tolerance)?
            .set_derivative_floor(self.derivative_floor)?
            .set_multiplicity(self.multiplicity)?;
        if let Some(v) = self.max_iter {
            params = params.set_max_iterations(v)?;
        }
        Ok(params)
    }
}


fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}


fn rule(out: &mut impl Write, ch: char, width: usize) -> io::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(width))
}


fn print_header(out: &mut impl Write, segment: Interval, eps: f64) -> io::Result<()> {
    rule(out, '=', 80)?;
    writeln!(out, "Function: f(x) = {}", CosineDrift::FORMULA)?;
    writeln!(out, "Segment: [A, B] = {segment}")?;
    writeln!(out, "Accuracy: epsilon = {eps:e}")?;
    rule(out, '=', 80)?;
    writeln!(out)
}


fn print_brackets(out: &mut impl Write, segment: Interval, n: usize, brackets: &[Interval]) -> io::Result<()> {
    let h = segment.width() / n as f64;
    writeln!(out, "\nPartition step h = {h:.10}")?;
    writeln!(out, "Segments of sign change found: {}\n", brackets.len())?;
    for (idx, bracket) in brackets.iter().enumerate() {
        writeln!(out, "Segment {}: {bracket:.10}", idx + 1)?;
    }
    writeln!(out)
}


/// Reads one trimmed line, `None` on end of input.
fn read_line(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}


/// Prompts for `N` until the user answers `no` to "Do we need a new N?".
///
/// Returns the brackets of the last accepted `N`.
fn prompt_partitions<D>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    function: &D,
    segment: Interval,
) -> Result<Vec<Interval>>
where D: Differentiable + ?Sized {
    let mut brackets = Vec::new();

    loop {
        let Some(line) = read_line(input, out, "Enter N (the number of segment partitions): ")? else {
            return Ok(brackets);
        };

        let n: usize = match line.parse() {
            Ok(n)  => n,
            Err(_) => {
                // negative numbers parse as integers for the user, not for usize
                if line.parse::<i64>().is_ok() {
                    writeln!(out, "N must be >= 2")?;
                } else {
                    writeln!(out, "Input error! Please enter an integer.")?;
                }
                continue;
            }
        };

        brackets = match separate_roots(function, segment, n) {
            Ok(found) => found,
            Err(SeparationError::InvalidPartitionCount { .. }) => {
                writeln!(out, "N must be >= 2")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        print_brackets(out, segment, n, &brackets)?;

        match read_line(input, out, "Do we need a new N? (yes/no): ")? {
            Some(answer) if answer.eq_ignore_ascii_case("no") => return Ok(brackets),
            Some(_) => {}
            None    => return Ok(brackets),
        }
    }
}


fn print_outcome(
    out: &mut impl Write,
    algorithm: Algorithm,
    bracket: Interval,
    params: &ConvergenceParams,
    outcome: &RefinementOutcome,
) -> io::Result<()> {
    rule(out, '=', 60)?;
    match algorithm {
        Algorithm::Bisection => writeln!(out, "Initial segment: {bracket:.10}")?,
        Algorithm::Secant    => writeln!(
            out, "Initial approximation: x_0 = {:.10}, x_1 = {:.10}", bracket.low(), bracket.high()
        )?,
        Algorithm::Newton    => writeln!(out, "Initial approximation: x_0 = {:.10}", bracket.midpoint())?,
        Algorithm::ModifiedNewton => {
            writeln!(out, "Initial approximation: x_0 = {:.10}", bracket.midpoint())?;
            writeln!(out, "Root multiplicity m = {}", params.multiplicity())?;
        }
    }

    let estimate = match outcome {
        RefinementOutcome::Failed(reason) => {
            writeln!(out, "Error: {reason}")?;
            return writeln!(out);
        }
        RefinementOutcome::MaxIterationsReached(e) => {
            writeln!(out, "The maximum number of iterations has been reached: {}", e.iterations)?;
            e
        }
        RefinementOutcome::Converged(e) => {
            writeln!(out, "Steps: {}", e.iterations)?;
            e
        }
    };

    writeln!(out, "Approximate solution x_m: {:.15}", estimate.value)?;
    match algorithm {
        Algorithm::Bisection => writeln!(
            out, "Length of the last segment |x_m - x_(m-1)|: {:.15e}", estimate.last_step
        )?,
        _ => writeln!(out, "Last modified |x_m - x_(m-1)|: {:.15e}", estimate.last_step)?,
    }
    writeln!(out, "Residual |f(x_m)|: {:.15e}", estimate.residual)?;
    writeln!(out)
}


fn print_reports(out: &mut impl Write, reports: &[BracketReport], params: &ConvergenceParams) -> io::Result<()> {
    for (idx, report) in reports.iter().enumerate() {
        writeln!(out)?;
        rule(out, '#', 80)?;
        writeln!(out, "Root #{}: Segment {:.10}", idx + 1, report.bracket)?;
        rule(out, '#', 80)?;
        writeln!(out)?;

        for method in &report.methods {
            print_outcome(out, method.algorithm, report.bracket, params, &method.outcome)?;
        }
    }
    Ok(())
}


fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let params  = args.params()?;
    let segment = Interval::new(args.low, args.high)?;
    let function = CosineDrift;

    let stdin  = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out   = stdout.lock();

    print_header(&mut out, segment, params.tolerance())?;
    writeln!(out, "#1. Root separation")?;
    rule(&mut out, '-', 80)?;

    let brackets = match args.partitions {
        Some(n) => {
            let brackets = separate_roots(&function, segment, n)?;
            print_brackets(&mut out, segment, n, &brackets)?;
            brackets
        }
        None    => prompt_partitions(&mut input, &mut out, &function, segment)?,
    };

    if brackets.is_empty() {
        writeln!(out, "Roots not found!")?;
        return Ok(());
    }

    writeln!(out)?;
    rule(&mut out, '=', 80)?;
    writeln!(out, "#2. Clarification of roots")?;
    rule(&mut out, '=', 80)?;
    writeln!(out)?;

    let reports = refine_brackets(&function, &brackets, &params);
    print_reports(&mut out, &reports, &params)?;

    writeln!(out)?;
    rule(&mut out, '=', 80)?;
    writeln!(out, "solution completed")?;
    rule(&mut out, '=', 80)?;
    Ok(())
}
