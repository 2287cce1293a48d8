//! Command-line entry points for the symptom triage service: the HTTP
//! server plus demo and validation subcommands over the bundled catalog.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use triage_ai::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
