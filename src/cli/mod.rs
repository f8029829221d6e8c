mod handlers;
pub mod logging;
pub mod parse;

use clap::Parser;
pub use handlers::{Ingest, ingest};
pub use parse::Cli;

use crate::core::error::Error;

/// Parse arguments, install logging and run the pipeline.
pub fn run() -> Result<(), Error> {
    let cli = parse::Cli::parse();
    logging::init_tracing(logging::DEFAULT_FILTER);
    handlers::chart(&cli)
}
