mod batch;
mod dlq;
mod domain;
mod engine;
mod ingestion;
mod output_repository;
mod script;

use std::{env, fs::File, io, path::Path};

use tracing_subscriber::EnvFilter;

use crate::dlq::StdErrDLQ;
use crate::domain::{Error, traits::OperationStream};
use crate::engine::Engine;
use crate::ingestion::CsvReader;
use crate::output_repository::TranscriptOutput;
use crate::script::BuiltinScript;

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout only carries the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match env::args().nth(1) {
        Some(file_path) => {
            let file = File::open(Path::new(&file_path))?;
            run(CsvReader::new(file)?).await?;
        }
        None => run(BuiltinScript::new()).await?,
    }

    Ok(())
}

async fn run<I: OperationStream>(ingestion: I) -> Result<(), Error> {
    let output = TranscriptOutput::new(io::stdout().lock());
    let mut engine = Engine::new(ingestion, output, StdErrDLQ::default());

    engine.process().await?;
    engine.flush()
}
