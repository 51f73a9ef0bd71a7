mod cli;
mod commands;
mod demo;
mod feed;
mod infra;
mod routes;
mod server;

use hirezy::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
