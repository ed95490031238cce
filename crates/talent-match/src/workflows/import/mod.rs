//! Batch ranking of applicants exported as CSV.

mod parser;

use std::cmp::Reverse;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::scoring::{JobRequirement, MatchResult, MatchScorer, ValidationError};
use crate::workflows::applications::{ApplicantId, ApplicantSnapshot};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read applicant export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("applicant on line {line} cannot be scored: {source}")]
    Validation {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

/// Reads applicant exports with the header
/// `applicant_id,skills,experience_level,years_of_experience,education_level,location`.
/// Skills are separated by `;` and an empty location means none was given.
pub struct ApplicantCsvImporter;

impl ApplicantCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicantSnapshot>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApplicantSnapshot>, ImportError> {
        parser::parse_applicants(reader)
    }
}

/// One applicant's position in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedApplicant {
    pub applicant_id: ApplicantId,
    pub result: MatchResult,
}

/// Score every applicant against the job, best match first. Equal scores are ordered by
/// applicant id.
pub fn rank_applicants(
    scorer: &MatchScorer,
    job: &JobRequirement,
    applicants: &[ApplicantSnapshot],
) -> Result<Vec<RankedApplicant>, ValidationError> {
    let mut ranked = applicants
        .iter()
        .map(|applicant| {
            scorer
                .score(job, &applicant.profile)
                .map(|result| RankedApplicant {
                    applicant_id: applicant.id.clone(),
                    result,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by_key(|entry| (Reverse(entry.result.score), entry.applicant_id.clone()));
    Ok(ranked)
}
