//! CLI entry point for the portal layer lint.

use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let outcome =
        architecture_lint::locate_workspace().and_then(|root| architecture_lint::lint_workspace(&root));
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr().lock(), "{err}");
            ExitCode::FAILURE
        }
    }
}
