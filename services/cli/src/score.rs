use crate::infra::{read_applicant, read_job};
use clap::Args;
use std::path::PathBuf;
use talent_match::config::AppConfig;
use talent_match::error::AppError;
use talent_match::scoring::MatchScorer;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding the job requirement
    #[arg(long)]
    pub(crate) job: PathBuf,
    /// JSON file holding the applicant profile
    #[arg(long)]
    pub(crate) applicant: PathBuf,
    /// Pretty-print the JSON result
    #[arg(long)]
    pub(crate) pretty: bool,
}

pub(crate) fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let job = read_job(&args.job)?;
    let applicant = read_applicant(&args.applicant)?;

    let result = MatchScorer::new(config.scoring.weights).score(&job, &applicant)?;
    info!(score = result.score, "applicant scored");

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");
    Ok(())
}
