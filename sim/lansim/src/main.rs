use lansim::cli::initialize_from_arguments;
use std::process::ExitCode;

/// Runs the command given on the command line, see `lansim --help`
fn main() -> ExitCode {
    match initialize_from_arguments() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
