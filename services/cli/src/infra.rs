use std::fs;
use std::path::Path;

use talent_match::config::AppConfig;
use talent_match::error::AppError;
use talent_match::scoring::{ApplicantProfile, JobRequirement};
use talent_match::telemetry;
use tracing::debug;

pub(crate) fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(
        environment = ?config.environment,
        weights = ?config.scoring.weights,
        "configuration loaded"
    );
    Ok(config)
}

pub(crate) fn read_job(path: &Path) -> Result<JobRequirement, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(JobRequirement::from_json(&raw)?)
}

pub(crate) fn read_applicant(path: &Path) -> Result<ApplicantProfile, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(ApplicantProfile::from_json(&raw)?)
}
