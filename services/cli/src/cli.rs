use crate::demo::{run_demo, DemoArgs};
use crate::infra::bootstrap;
use crate::rank::{run_rank, RankArgs};
use crate::score::{run_score, ScoreArgs};
use clap::{Parser, Subcommand};
use talent_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "talent-match",
    about = "Score and rank job applicants against job requirements",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one applicant profile against one job requirement
    Score(ScoreArgs),
    /// Rank every applicant in a CSV export against a job requirement
    Rank(RankArgs),
    /// Walk through applying, reviewing, and shortlisting with sample data
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = bootstrap()?;

    match cli.command {
        Command::Score(args) => run_score(args, &config),
        Command::Rank(args) => run_rank(args, &config),
        Command::Demo(args) => run_demo(args, &config),
    }
}
