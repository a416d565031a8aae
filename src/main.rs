use std::io;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use sinequad::application;
use sinequad::configuration::Configuration;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("sinequad=warn"))
        .with_writer(io::stderr)
        .init();

    let configuration = Configuration::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match application::run(stdin.lock(), &mut stdout, &configuration) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!(?error, "run failed");
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
