// ============================================================================
// Calculator Binary
// calculator <lhs> <operator> <rhs>
// ============================================================================

use calculator::cli::{self, Cli};
use calculator::engine::Calculator;
use calculator::interfaces::LoggingEventHandler;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    cli::init_logging();

    let args = Cli::capture();
    let calculator = Calculator::new(Arc::new(LoggingEventHandler));

    let mut stdout = io::stdout().lock();
    match cli::run(&calculator, &args, &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!(error = %err, "Failed to write result");
            ExitCode::from(cli::EXIT_FAILURE)
        }
    }
}
