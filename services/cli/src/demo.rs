use clap::Args;
use std::sync::Arc;
use talent_match::config::AppConfig;
use talent_match::error::AppError;
use talent_match::scoring::{ApplicantProfile, EducationLevel, ExperienceLevel, JobRequirement};
use talent_match::workflows::applications::{
    ApplicantId, ApplicantSnapshot, ApplicationQuery, ApplicationRecord, ApplicationService,
    ApplicationStatus, InMemoryApplicationRepository, JobId, JobPosting,
};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Shortlist applications scoring at or above this value
    #[arg(long, default_value_t = 70, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) shortlist_at: u8,
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryApplicationRepository::default());
    let service = ApplicationService::new(repository, config.scoring.weights);

    let job = demo_job();
    println!("Job: {} ({})", job.title, job.id);
    println!(
        "  requires {} | {} | {}",
        job.requirement.required_skills.join(", "),
        job.requirement.experience_level,
        job.requirement.education_level
    );

    let applicants = demo_applicants();
    if let Some(first) = applicants.first() {
        let preview = service.preview(&job.requirement, &first.profile)?;
        println!("\nPreview for {} before applying: {}", first.id, preview.score);
    }

    for applicant in &applicants {
        let cover_letter = Some(format!("Hello from {}", applicant.id));
        let record = service.apply(&job, applicant, cover_letter)?;
        println!(
            "Applied: {:<8} score {:>3} ({})",
            record.applicant_id, record.match_score, record.id
        );
    }

    let queue = service.open_review_queue(&job.id)?;
    println!("\nReview queue");
    render_records(&queue);

    for record in queue.iter().filter(|r| r.match_score >= args.shortlist_at) {
        service.update_status(&record.id, ApplicationStatus::Shortlisted)?;
    }

    let shortlist = service.list_for_job(
        &job.id,
        &ApplicationQuery {
            status: Some(ApplicationStatus::Shortlisted),
            ..ApplicationQuery::default()
        },
    )?;
    println!("\nShortlisted at {} or above", args.shortlist_at);
    render_records(&shortlist);
    Ok(())
}

fn render_records(records: &[ApplicationRecord]) {
    if records.is_empty() {
        println!("  (none)");
        return;
    }
    for record in records {
        let missing = if record.missing_skills.is_empty() {
            "none".to_string()
        } else {
            record.missing_skills.join(", ")
        };
        println!(
            "  {:<8} {:>3} {:<12} missing: {}",
            record.applicant_id,
            record.match_score,
            record.status.label(),
            missing
        );
    }
}

fn demo_job() -> JobPosting {
    JobPosting {
        id: JobId("job-platform".to_string()),
        title: "Platform Engineer".to_string(),
        requirement: JobRequirement::new(
            ["Rust", "Kubernetes", "Terraform", "PostgreSQL"],
            ExperienceLevel::Senior,
            EducationLevel::Bachelor,
        )
        .with_location("Amsterdam"),
        is_active: true,
    }
}

fn demo_applicants() -> Vec<ApplicantSnapshot> {
    vec![
        ApplicantSnapshot {
            id: ApplicantId("noor".to_string()),
            profile: ApplicantProfile::new(
                ["rust", "kubernetes", "terraform"],
                ExperienceLevel::Senior,
                7.0,
                EducationLevel::Master,
            )
            .with_location("Amsterdam"),
        },
        ApplicantSnapshot {
            id: ApplicantId("tomas".to_string()),
            profile: ApplicantProfile::new(
                ["go", "kubernetes"],
                ExperienceLevel::Mid,
                4.0,
                EducationLevel::Bachelor,
            )
            .with_location("Rotterdam"),
        },
        ApplicantSnapshot {
            id: ApplicantId("mei".to_string()),
            profile: ApplicantProfile::new(
                ["postgresql"],
                ExperienceLevel::Junior,
                1.5,
                EducationLevel::Associate,
            ),
        },
    ]
}
