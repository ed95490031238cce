//! Properties of the match scorer exercised through the public API, including the reference
//! scenarios recruiters use to sanity-check rankings.

use std::sync::Arc;
use std::thread;

use serde_json::json;
use talent_match::scoring::{
    score_match, ApplicantProfile, EducationLevel, ExperienceLevel, JobRequirement, MatchCategory,
    MatchScorer, OrdinalScale, ScoringWeights, DEFAULT_WEIGHTS,
};

fn requirement(skills: &[&str]) -> JobRequirement {
    JobRequirement::new(
        skills.iter().copied(),
        ExperienceLevel::Mid,
        EducationLevel::Bachelor,
    )
}

fn profile(skills: &[&str]) -> ApplicantProfile {
    ApplicantProfile::new(
        skills.iter().copied(),
        ExperienceLevel::Mid,
        3.0,
        EducationLevel::Bachelor,
    )
}

fn sub_score(
    job: &JobRequirement,
    applicant: &ApplicantProfile,
    category: MatchCategory,
) -> f64 {
    score_match(job, applicant)
        .expect("scores")
        .sub_score(category)
        .expect("category present")
}

#[test]
fn scenario_partial_skills_full_everything_else() {
    let job = requirement(&["React", "Node.js", "TypeScript", "MongoDB"]);
    let applicant = profile(&["react", "node", "typescript"]);

    let result = score_match(&job, &applicant).expect("scores");

    assert_eq!(result.sub_score(MatchCategory::Skills), Some(75.0));
    assert_eq!(result.sub_score(MatchCategory::Experience), Some(100.0));
    assert_eq!(result.sub_score(MatchCategory::Education), Some(100.0));
    assert_eq!(result.sub_score(MatchCategory::Location), Some(100.0));
    assert_eq!(result.score, 90);
    assert_eq!(result.matched_skills, vec!["React", "Node.js", "TypeScript"]);
    assert_eq!(result.missing_skills, vec!["MongoDB"]);
}

#[test]
fn scenario_no_skill_requirements_and_far_underqualified() {
    let job = JobRequirement::new(
        Vec::<String>::new(),
        ExperienceLevel::Senior,
        EducationLevel::Bachelor,
    );
    let applicant = ApplicantProfile::new(
        ["excel"],
        ExperienceLevel::Entry,
        0.0,
        EducationLevel::Bachelor,
    );

    let result = score_match(&job, &applicant).expect("scores");

    assert_eq!(result.sub_score(MatchCategory::Skills), Some(100.0));
    assert_eq!(result.sub_score(MatchCategory::Experience), Some(30.0));
    // 40 + 9 from skills and experience, 20 + 10 from education and location
    assert_eq!(result.score, 79);
}

#[test]
fn scenario_remote_job_ignores_missing_applicant_location() {
    let job = requirement(&[]).with_location("Remote");
    let applicant = profile(&[]);
    assert!(applicant.location.is_none());

    assert_eq!(sub_score(&job, &applicant, MatchCategory::Location), 100.0);
}

#[test]
fn scenario_two_education_levels_below() {
    let job = JobRequirement::new(["Statistics"], ExperienceLevel::Mid, EducationLevel::Phd);
    let applicant = profile(&["statistics"]);

    assert_eq!(sub_score(&job, &applicant, MatchCategory::Education), 40.0);
}

#[test]
fn scenario_unrecognized_experience_is_neutral() {
    let job = JobRequirement::from_value(json!({
        "requiredSkills": ["SQL"],
        "experienceLevel": "MID",
        "educationLevel": "BACHELOR"
    }))
    .expect("job parses");
    let applicant = ApplicantProfile::from_value(json!({
        "skills": ["sql"],
        "experienceLevel": "",
        "yearsOfExperience": 2,
        "educationLevel": "BACHELOR"
    }))
    .expect("applicant parses");

    let result = score_match(&job, &applicant).expect("unknown level does not fail");

    assert_eq!(result.sub_score(MatchCategory::Experience), Some(50.0));
    assert_eq!(result.sub_score(MatchCategory::Skills), Some(100.0));
    assert_eq!(result.sub_score(MatchCategory::Education), Some(100.0));
    assert_eq!(result.sub_score(MatchCategory::Location), Some(100.0));
    assert_eq!(result.score, 85);
}

#[test]
fn weights_sum_to_one() {
    let sum: f64 = MatchCategory::ALL
        .iter()
        .map(|category| DEFAULT_WEIGHTS.weight(*category))
        .sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn score_stays_in_range_for_every_level_combination() {
    let locations = [None, Some("Remote"), Some("Berlin"), Some("berlin, de"), Some("Madrid")];
    let skill_sets: [&[&str]; 3] = [&[], &["go"], &["go", "rust", "sql"]];

    for required_exp in ExperienceLevel::LEVELS {
        for applicant_exp in ExperienceLevel::LEVELS {
            for required_edu in EducationLevel::LEVELS {
                for applicant_edu in EducationLevel::LEVELS {
                    for job_location in locations {
                        for applicant_location in locations {
                            for required in skill_sets {
                                let mut job = JobRequirement::new(
                                    required.iter().copied(),
                                    *required_exp,
                                    *required_edu,
                                );
                                job.location = job_location.map(str::to_string);
                                let mut applicant = ApplicantProfile::new(
                                    ["rust"],
                                    *applicant_exp,
                                    1.0,
                                    *applicant_edu,
                                );
                                applicant.location = applicant_location.map(str::to_string);

                                let result = score_match(&job, &applicant).expect("scores");
                                assert!(result.score <= 100);
                                for component in &result.components {
                                    assert!((0.0..=100.0).contains(&component.score));
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn empty_requirements_always_score_full_skills() {
    let job = requirement(&[]);
    for skills in [&[][..], &["cobol"][..], &["", "  "][..]] {
        assert_eq!(
            sub_score(&job, &profile(skills), MatchCategory::Skills),
            100.0
        );
    }
}

#[test]
fn remote_jobs_ignore_applicant_location_in_any_case() {
    for job_location in ["remote", "REMOTE", "Remote - US", "Fully ReMoTe"] {
        let job = requirement(&[]).with_location(job_location);
        for applicant_location in [None, Some("Nairobi"), Some("")] {
            let mut applicant = profile(&[]);
            applicant.location = applicant_location.map(str::to_string);
            assert_eq!(sub_score(&job, &applicant, MatchCategory::Location), 100.0);
        }
    }
}

#[test]
fn matching_levels_hit_the_ceiling() {
    for level in ExperienceLevel::LEVELS {
        let job = JobRequirement::new(["x"], *level, EducationLevel::Bachelor);
        let applicant = ApplicantProfile::new(["x"], *level, 0.0, EducationLevel::Bachelor);
        assert_eq!(
            sub_score(&job, &applicant, MatchCategory::Experience),
            100.0
        );
    }

    for required in EducationLevel::LEVELS {
        for held in EducationLevel::LEVELS.iter().filter(|held| *held >= required) {
            let job = JobRequirement::new(["x"], ExperienceLevel::Mid, *required);
            let applicant = ApplicantProfile::new(["x"], ExperienceLevel::Mid, 0.0, *held);
            assert_eq!(sub_score(&job, &applicant, MatchCategory::Education), 100.0);
        }
    }
}

#[test]
fn overqualification_beyond_one_level_is_never_below_ninety() {
    for required in ExperienceLevel::LEVELS {
        for held in ExperienceLevel::LEVELS
            .iter()
            .filter(|held| held.rank() >= required.rank() + 2)
        {
            let job = JobRequirement::new(["x"], *required, EducationLevel::Bachelor);
            let applicant = ApplicantProfile::new(["x"], *held, 0.0, EducationLevel::Bachelor);
            assert_eq!(sub_score(&job, &applicant, MatchCategory::Experience), 90.0);
        }
    }
}

#[test]
fn identical_inputs_yield_identical_results() {
    let job = requirement(&["Kotlin", "Android", "Gradle"]).with_location("Warsaw");
    let applicant = profile(&["kotlin", "java"]).with_location("warsaw, pl");

    let first = score_match(&job, &applicant).expect("scores");
    let second = score_match(&job, &applicant).expect("scores");
    assert_eq!(first, second);
    for (a, b) in first.components.iter().zip(&second.components) {
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }
}

#[test]
fn scorer_can_be_shared_across_threads() {
    let scorer = Arc::new(MatchScorer::default());
    let job = Arc::new(requirement(&["Rust", "SQL"]));
    let expected = scorer
        .score(&job, &profile(&["rust"]))
        .expect("scores")
        .score;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let scorer = Arc::clone(&scorer);
            let job = Arc::clone(&job);
            thread::spawn(move || {
                scorer
                    .score(&job, &profile(&["rust"]))
                    .expect("scores")
                    .score
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread completes"), expected);
    }
}

#[test]
fn alternate_weights_reweigh_the_same_sub_scores() {
    let job = requirement(&["Rust", "SQL"]).with_location("Lyon");
    let applicant = profile(&["rust"]).with_location("Lille");

    let location_heavy = ScoringWeights::new(0.1, 0.1, 0.1, 0.7).expect("valid weights");
    let default = MatchScorer::default()
        .score(&job, &applicant)
        .expect("scores");
    let reweighted = MatchScorer::new(location_heavy)
        .score(&job, &applicant)
        .expect("scores");

    assert_eq!(
        default.sub_score(MatchCategory::Location),
        reweighted.sub_score(MatchCategory::Location)
    );
    assert!(reweighted.score < default.score);
}
