use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::scoring::{
    ApplicantProfile, EducationLevel, ExperienceLevel, JobRequirement, DEFAULT_WEIGHTS,
};
use crate::workflows::applications::domain::{
    ApplicantId, ApplicantSnapshot, JobId, JobPosting,
};
use crate::workflows::applications::repository::InMemoryApplicationRepository;
use crate::workflows::applications::ApplicationService;

pub(super) type MemoryService = ApplicationService<InMemoryApplicationRepository>;

pub(super) fn service() -> (Arc<InMemoryApplicationRepository>, MemoryService) {
    let repository = Arc::new(InMemoryApplicationRepository::default());
    let service = ApplicationService::new(repository.clone(), DEFAULT_WEIGHTS);
    (repository, service)
}

pub(super) fn backend_job() -> JobPosting {
    JobPosting {
        id: JobId("job-backend".to_string()),
        title: "Backend Engineer".to_string(),
        requirement: JobRequirement::new(
            ["Rust", "PostgreSQL", "Kafka", "Docker"],
            ExperienceLevel::Senior,
            EducationLevel::Bachelor,
        )
        .with_location("Berlin"),
        is_active: true,
    }
}

pub(super) fn closed_job() -> JobPosting {
    JobPosting {
        id: JobId("job-closed".to_string()),
        is_active: false,
        ..backend_job()
    }
}

pub(super) fn strong_applicant() -> ApplicantSnapshot {
    ApplicantSnapshot {
        id: ApplicantId("ada".to_string()),
        profile: ApplicantProfile::new(
            ["rust", "postgresql", "kafka", "docker"],
            ExperienceLevel::Senior,
            8.0,
            EducationLevel::Master,
        )
        .with_location("Berlin"),
    }
}

pub(super) fn partial_applicant() -> ApplicantSnapshot {
    ApplicantSnapshot {
        id: ApplicantId("grace".to_string()),
        profile: ApplicantProfile::new(
            ["rust", "docker"],
            ExperienceLevel::Mid,
            4.0,
            EducationLevel::Bachelor,
        )
        .with_location("Potsdam"),
    }
}

pub(super) fn weak_applicant() -> ApplicantSnapshot {
    ApplicantSnapshot {
        id: ApplicantId("linus".to_string()),
        profile: ApplicantProfile::new(
            ["php"],
            ExperienceLevel::Entry,
            0.5,
            EducationLevel::HighSchool,
        ),
    }
}

pub(super) fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}
