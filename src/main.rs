use std::process::ExitCode;

use chipmeta::ui::output;

fn main() -> ExitCode {
    match chipmeta::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
