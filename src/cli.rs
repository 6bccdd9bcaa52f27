// ============================================================================
// Command-Line Surface
// Argument capture, output, exit codes and optional logging setup
// ============================================================================

use crate::engine::Calculator;
use crate::numeric::format_grouped;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};

/// Exit code for a printed result
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for any validation or arithmetic error
pub const EXIT_FAILURE: u8 = 1;

/// `calculator <lhs> <operator> <rhs>`
///
/// Every argument is taken verbatim as a positional value, including ones
/// that start with `-` and a bare `--`, so the count check stays with the
/// calculator.
#[derive(Debug, Parser)]
#[command(
    name = "calculator",
    about = "Exact four-place decimal calculator",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Left operand, operator and right operand
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Capture the process arguments.
    ///
    /// An argument vector clap cannot represent (for example non UTF-8 text)
    /// is reported as an empty list and fails the count check.
    pub fn capture() -> Vec<String> {
        Self::capture_from(std::env::args_os())
    }

    /// Capture from an explicit iterator whose first item is the binary name.
    pub fn capture_from<I, T>(itr: I) -> Vec<String>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut itr = itr.into_iter().map(Into::<OsString>::into);
        let bin = itr.next().unwrap_or_else(|| OsString::from("calculator"));

        // clap consumes this escape itself; a user-supplied `--` stays a value.
        let argv = [bin, OsString::from("--")].into_iter().chain(itr);

        match Self::try_parse_from(argv) {
            Ok(cli) => cli.args,
            Err(err) => {
                tracing::warn!(error = %err, "Unusable command line");
                Vec::new()
            }
        }
    }
}

/// Evaluate `args` and write exactly one line to `out`.
///
/// Results and error messages both go to `out`; the return value is the
/// process exit code.
pub fn run<S, W>(calculator: &Calculator, args: &[S], out: &mut W) -> io::Result<u8>
where
    S: AsRef<str>,
    W: Write,
{
    match calculator.evaluate(args) {
        Ok(value) => {
            writeln!(out, "{}", format_grouped(value))?;
            Ok(EXIT_SUCCESS)
        }
        Err(err) => {
            writeln!(out, "{}", err)?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Install a stderr subscriber filtered by `CALCULATOR_LOG` (default `warn`).
#[cfg(feature = "logging")]
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("CALCULATOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Logging is compiled out without the `logging` feature.
#[cfg(not(feature = "logging"))]
pub fn init_logging() {}
