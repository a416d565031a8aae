use std::io::{
    BufRead,
    Write
};

use thiserror::Error;
use tracing::debug;

use crate::configuration::Configuration;
use crate::console::consoleerror::ConsoleError;
use crate::console::intervalreader::IntervalReader;
use crate::experiment::experimentrunner::ExperimentRunner;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error("cannot write result {index} to output: {source}")]
    Output {
        index: usize,
        source: std::io::Error
    },
    #[error("cannot flush output: {0}")]
    Flush(std::io::Error),
}

/// One full run: read the interval, run every configured experiment, print
/// the table. Stops at the first failed write.
pub fn run<R, W>(input: R, output: &mut W, configuration: &Configuration) -> Result<(), ApplicationError>
where
    R: BufRead,
    W: Write,
{
    let interval = IntervalReader::new(input, output).read_interval()?;
    let results = ExperimentRunner::new().run(&interval, configuration.subdivisions());
    for (index, line) in ExperimentRunner::format(&results).iter().enumerate() {
        writeln!(output, "{}", line).map_err(|source| ApplicationError::Output { index, source })?;
    }
    output.flush().map_err(ApplicationError::Flush)?;
    debug!(experiments = results.len(), "run finished");
    Ok(())
}
