mod cli;
mod demo;
mod infra;
mod rank;
mod score;

use talent_match::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
