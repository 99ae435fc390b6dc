//! Binary entrypoint for the `bugdash` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Tracker tokens (e.g. GITHUB_TOKEN) may live in a local .env file.
    dotenvy::dotenv().ok();
    env_logger::init();

    match bugdash::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
