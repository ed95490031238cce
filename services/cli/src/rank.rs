use crate::infra::read_job;
use clap::Args;
use std::path::PathBuf;
use talent_match::config::AppConfig;
use talent_match::error::AppError;
use talent_match::scoring::MatchScorer;
use talent_match::workflows::import::{rank_applicants, ApplicantCsvImporter, RankedApplicant};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// JSON file holding the job requirement
    #[arg(long)]
    pub(crate) job: PathBuf,
    /// CSV export of applicant profiles
    #[arg(long)]
    pub(crate) applicants: PathBuf,
    /// Hide applicants scoring below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) min_score: Option<u8>,
    /// Show at most this many applicants
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

pub(crate) fn run_rank(args: RankArgs, config: &AppConfig) -> Result<(), AppError> {
    let job = read_job(&args.job)?;
    let applicants = ApplicantCsvImporter::from_path(&args.applicants)?;
    info!(count = applicants.len(), "applicant export loaded");

    let ranked = rank_applicants(&MatchScorer::new(config.scoring.weights), &job, &applicants)?;
    let shown = select(ranked, args.min_score, args.limit);

    render_ranking(&shown, applicants.len());
    Ok(())
}

fn select(
    ranked: Vec<RankedApplicant>,
    min_score: Option<u8>,
    limit: Option<usize>,
) -> Vec<RankedApplicant> {
    ranked
        .into_iter()
        .filter(|entry| min_score.map_or(true, |minimum| entry.result.score >= minimum))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

fn render_ranking(shown: &[RankedApplicant], total: usize) {
    println!("Applicant ranking ({} of {} shown)", shown.len(), total);
    for (position, entry) in shown.iter().enumerate() {
        let missing = if entry.result.missing_skills.is_empty() {
            "none".to_string()
        } else {
            entry.result.missing_skills.join(", ")
        };
        println!(
            "{:>3}. {:<20} {:>3} | missing: {}",
            position + 1,
            entry.applicant_id,
            entry.result.score,
            missing
        );
    }
}
