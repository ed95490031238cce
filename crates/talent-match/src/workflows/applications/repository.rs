use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{ApplicantId, ApplicationId, ApplicationRecord, ApplicationStatus, JobId};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationRecord, RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn find(
        &self,
        job_id: &JobId,
        applicant_id: &ApplicantId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError>;
    fn for_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local repository for demos and tests. Enforces one application per applicant
/// and job, mirroring the unique key a relational store would carry.
#[derive(Debug, Default, Clone)]
pub struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl InMemoryApplicationRepository {
    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<ApplicationId, ApplicationRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }

    pub fn len(&self) -> usize {
        self.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.lock()?;
        let duplicate = guard.values().any(|existing| {
            existing.job_id == record.job_id && existing.applicant_id == record.applicant_id
        });
        if duplicate || guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.lock()?;
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        record.status = status;
        Ok(record.clone())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn find(
        &self,
        job_id: &JobId,
        applicant_id: &ApplicantId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(self
            .lock()?
            .values()
            .find(|record| &record.job_id == job_id && &record.applicant_id == applicant_id)
            .cloned())
    }

    fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self
            .lock()?
            .values()
            .filter(|record| &record.job_id == job_id)
            .cloned()
            .collect())
    }

    fn for_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self
            .lock()?
            .values()
            .filter(|record| &record.applicant_id == applicant_id)
            .cloned()
            .collect())
    }
}
