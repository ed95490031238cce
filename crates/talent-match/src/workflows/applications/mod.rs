//! Application intake: scoring an applicant against a job at submission time, storing the
//! result, and the recruiter-side listings built on top of it.

pub mod domain;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantId, ApplicantSnapshot, ApplicationId, ApplicationQuery, ApplicationRecord,
    ApplicationStatus, JobId, JobPosting, SortKey, SortOrder, UnknownStatus,
};
pub use repository::{ApplicationRepository, InMemoryApplicationRepository, RepositoryError};
pub use service::{ApplicationService, ApplicationServiceError};
