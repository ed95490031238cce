use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::domain::{
    ApplicantId, ApplicantSnapshot, ApplicationId, ApplicationQuery, ApplicationRecord,
    ApplicationStatus, JobId, JobPosting, SortKey, SortOrder, UnknownStatus,
};
use super::repository::{ApplicationRepository, RepositoryError};
use crate::scoring::{
    ApplicantProfile, JobRequirement, MatchResult, MatchScorer, ScoringWeights, ValidationError,
};

/// Service composing the match scorer with application storage.
pub struct ApplicationService<R> {
    repository: Arc<R>,
    scorer: MatchScorer,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<R> ApplicationService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>, weights: ScoringWeights) -> Self {
        Self {
            repository,
            scorer: MatchScorer::new(weights),
        }
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    /// Submit an application now. See [`ApplicationService::apply_at`].
    pub fn apply(
        &self,
        job: &JobPosting,
        applicant: &ApplicantSnapshot,
        cover_letter: Option<String>,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        self.apply_at(job, applicant, cover_letter, Utc::now())
    }

    /// Score the applicant against the job and persist a new `APPLIED` record carrying that
    /// score. Each applicant may apply to a given job once.
    pub fn apply_at(
        &self,
        job: &JobPosting,
        applicant: &ApplicantSnapshot,
        cover_letter: Option<String>,
        applied_at: DateTime<Utc>,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        if !job.is_active {
            warn!(job_id = %job.id, applicant_id = %applicant.id, "application to inactive job rejected");
            return Err(ApplicationServiceError::JobInactive(job.id.clone()));
        }

        if self.repository.find(&job.id, &applicant.id)?.is_some() {
            return Err(ApplicationServiceError::AlreadyApplied {
                job_id: job.id.clone(),
                applicant_id: applicant.id.clone(),
            });
        }

        let result = self.scorer.score(&job.requirement, &applicant.profile)?;

        let record = ApplicationRecord {
            id: next_application_id(),
            job_id: job.id.clone(),
            applicant_id: applicant.id.clone(),
            cover_letter: cover_letter.filter(|letter| !letter.trim().is_empty()),
            status: ApplicationStatus::Applied,
            match_score: result.score,
            matched_skills: result.matched_skills,
            missing_skills: result.missing_skills,
            applied_at,
        };

        let stored = self.repository.insert(record).map_err(|err| match err {
            RepositoryError::Conflict => ApplicationServiceError::AlreadyApplied {
                job_id: job.id.clone(),
                applicant_id: applicant.id.clone(),
            },
            other => ApplicationServiceError::Repository(other),
        })?;

        info!(
            application_id = %stored.id,
            job_id = %stored.job_id,
            applicant_id = %stored.applicant_id,
            match_score = stored.match_score,
            "application submitted"
        );
        Ok(stored)
    }

    /// Projected fit for an applicant who has not applied yet. Nothing is stored.
    pub fn preview(
        &self,
        requirement: &JobRequirement,
        profile: &ApplicantProfile,
    ) -> Result<MatchResult, ApplicationServiceError> {
        Ok(self.scorer.score(requirement, profile)?)
    }

    /// Applications for a job, filtered and ordered per the query. Ties fall back to the
    /// application time and then the id so repeated listings are stable.
    pub fn list_for_job(
        &self,
        job_id: &JobId,
        query: &ApplicationQuery,
    ) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        let mut records: Vec<ApplicationRecord> = self
            .repository
            .for_job(job_id)?
            .into_iter()
            .filter(|record| query.status.map_or(true, |status| record.status == status))
            .filter(|record| {
                query
                    .min_match_score
                    .map_or(true, |minimum| record.match_score >= minimum)
            })
            .collect();

        records.sort_by(|a, b| {
            let primary = match query.sort_by {
                SortKey::MatchScore => a.match_score.cmp(&b.match_score),
                SortKey::AppliedAt => a.applied_at.cmp(&b.applied_at),
            };
            let primary = match query.order {
                SortOrder::Asc => primary,
                SortOrder::Desc => primary.reverse(),
            };
            primary.then_with(|| tie_break(a, b))
        });

        debug!(job_id = %job_id, count = records.len(), "listed applications for job");
        Ok(records)
    }

    /// The recruiter's review queue: every application for the job, best match first. Any
    /// application still `APPLIED` is marked `VIEWED` as part of opening the queue.
    pub fn open_review_queue(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        let records = self.list_for_job(job_id, &ApplicationQuery::default())?;
        let mut queue = Vec::with_capacity(records.len());
        for record in records {
            if record.status == ApplicationStatus::Applied {
                queue.push(
                    self.repository
                        .update_status(&record.id, ApplicationStatus::Viewed)?,
                );
            } else {
                queue.push(record);
            }
        }
        Ok(queue)
    }

    /// An applicant's own applications, newest first.
    pub fn list_for_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        let mut records = self.repository.for_applicant(applicant_id)?;
        records.sort_by(|a, b| {
            b.applied_at
                .cmp(&a.applied_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(records)
    }

    /// Move an application to another pipeline stage. The stored match score is untouched.
    pub fn update_status(
        &self,
        application_id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self.repository.update_status(application_id, status)?;
        info!(application_id = %record.id, status = status.label(), "application status updated");
        Ok(record)
    }

    /// Same as [`ApplicationService::update_status`] for a status given as text.
    pub fn update_status_str(
        &self,
        application_id: &ApplicationId,
        status: &str,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let status = status.parse::<ApplicationStatus>()?;
        self.update_status(application_id, status)
    }

    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

fn tie_break(a: &ApplicationRecord, b: &ApplicationRecord) -> CmpOrdering {
    a.applied_at
        .cmp(&b.applied_at)
        .then_with(|| a.id.cmp(&b.id))
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("job {0} is no longer accepting applications")]
    JobInactive(JobId),
    #[error("applicant {applicant_id} has already applied to job {job_id}")]
    AlreadyApplied {
        job_id: JobId,
        applicant_id: ApplicantId,
    },
    #[error(transparent)]
    InvalidStatus(#[from] UnknownStatus),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
