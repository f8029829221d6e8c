use std::process::ExitCode;

fn main() -> ExitCode {
    match barchart::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "barchart failed");
            ExitCode::FAILURE
        }
    }
}
