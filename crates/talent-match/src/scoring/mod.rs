//! Weighted comparison of a job's requirements with an applicant's profile.
//!
//! Four independent comparators (skills, experience, education, location) each produce a
//! 0-100 sub-score. [`MatchScorer`] weighs them and rounds once to an integer score. The
//! scorer holds nothing but its weights, so one instance can be shared freely across threads.

pub mod education;
pub mod experience;
pub mod levels;
pub mod location;
pub mod profile;
pub mod skills;
pub mod weights;

pub use levels::{EducationLevel, ExperienceLevel, Ordinal, OrdinalScale};
pub use profile::{ApplicantProfile, JobRequirement, ValidationError};
pub use weights::{ScoringWeights, WeightsError, DEFAULT_WEIGHTS};

use serde::{Deserialize, Serialize};

pub(crate) const FULL_SCORE: f64 = 100.0;
/// Assigned when a category cannot be evaluated from the data given.
pub(crate) const NEUTRAL_SCORE: f64 = 50.0;

pub(crate) fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Scored dimension of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCategory {
    Skills,
    Experience,
    Education,
    Location,
}

impl MatchCategory {
    pub const ALL: [MatchCategory; 4] = [
        MatchCategory::Skills,
        MatchCategory::Experience,
        MatchCategory::Education,
        MatchCategory::Location,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MatchCategory::Skills => "skills",
            MatchCategory::Experience => "experience",
            MatchCategory::Education => "education",
            MatchCategory::Location => "location",
        }
    }
}

/// One category's contribution, kept so a score can be explained after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponent {
    pub category: MatchCategory,
    pub score: f64,
    pub weight: f64,
    pub notes: String,
}

/// Final score plus the breakdown it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u8,
    pub components: Vec<ScoreComponent>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl MatchResult {
    pub fn sub_score(&self, category: MatchCategory) -> Option<f64> {
        self.components
            .iter()
            .find(|component| component.category == category)
            .map(|component| component.score)
    }
}

/// Stateless scorer parameterized by its category weights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchScorer {
    weights: ScoringWeights,
}

impl MatchScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn score(
        &self,
        job: &JobRequirement,
        applicant: &ApplicantProfile,
    ) -> Result<MatchResult, ValidationError> {
        applicant.validate()?;

        let skills = skills::compare(&job.required_skills, &applicant.skills);
        let experience = experience::compare(&job.experience_level, &applicant.experience_level);
        let education = education::compare(&job.education_level, &applicant.education_level);
        let location = location::compare(job.location.as_deref(), applicant.location.as_deref());

        // Accumulated in category order so equal inputs always produce the same bits.
        let mut total = 0.0;
        total += skills.score * self.weights.skills();
        total += experience * self.weights.experience();
        total += education * self.weights.education();
        total += location * self.weights.location();

        let components = vec![
            ScoreComponent {
                category: MatchCategory::Skills,
                score: skills.score,
                weight: self.weights.skills(),
                notes: skills_notes(&skills),
            },
            ScoreComponent {
                category: MatchCategory::Experience,
                score: experience,
                weight: self.weights.experience(),
                notes: format!(
                    "required {}, applicant {}",
                    job.experience_level, applicant.experience_level
                ),
            },
            ScoreComponent {
                category: MatchCategory::Education,
                score: education,
                weight: self.weights.education(),
                notes: format!(
                    "required {}, applicant {}",
                    job.education_level, applicant.education_level
                ),
            },
            ScoreComponent {
                category: MatchCategory::Location,
                score: location,
                weight: self.weights.location(),
                notes: location_notes(job.location.as_deref(), applicant.location.as_deref()),
            },
        ];

        Ok(MatchResult {
            score: round_score(total),
            components,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
        })
    }
}

/// Score a match with the default weights.
pub fn score_match(
    job: &JobRequirement,
    applicant: &ApplicantProfile,
) -> Result<MatchResult, ValidationError> {
    MatchScorer::default().score(job, applicant)
}

fn round_score(total: f64) -> u8 {
    if !total.is_finite() {
        return 0;
    }
    total.round().clamp(0.0, FULL_SCORE) as u8
}

fn skills_notes(skills: &skills::SkillsComparison) -> String {
    let required = skills.matched.len() + skills.missing.len();
    if required == 0 {
        "no required skills".to_string()
    } else {
        format!("{} of {} required skills matched", skills.matched.len(), required)
    }
}

fn location_notes(job: Option<&str>, applicant: Option<&str>) -> String {
    match (job.filter(|l| !l.is_empty()), applicant) {
        (None, _) => "job has no location requirement".to_string(),
        (Some(job), _) if location::is_remote(job) => format!("remote job ({job})"),
        (Some(job), Some(applicant)) if !applicant.is_empty() => {
            format!("job in {job}, applicant in {applicant}")
        }
        (Some(job), _) => format!("job in {job}, applicant location unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobRequirement {
        JobRequirement::new(
            ["React", "Node.js", "TypeScript", "MongoDB"],
            ExperienceLevel::Mid,
            EducationLevel::Bachelor,
        )
    }

    fn applicant() -> ApplicantProfile {
        ApplicantProfile::new(
            ["react", "node", "typescript"],
            ExperienceLevel::Mid,
            4.0,
            EducationLevel::Bachelor,
        )
    }

    #[test]
    fn combines_sub_scores_with_default_weights() {
        let result = score_match(&job(), &applicant()).expect("scores");

        assert_eq!(result.score, 90);
        assert_eq!(result.sub_score(MatchCategory::Skills), Some(75.0));
        assert_eq!(result.sub_score(MatchCategory::Experience), Some(100.0));
        assert_eq!(result.sub_score(MatchCategory::Education), Some(100.0));
        assert_eq!(result.sub_score(MatchCategory::Location), Some(100.0));
        assert_eq!(result.missing_skills, vec!["MongoDB"]);
        assert_eq!(result.components.len(), 4);
    }

    #[test]
    fn components_carry_their_weights() {
        let result = score_match(&job(), &applicant()).expect("scores");
        let weight_sum: f64 = result.components.iter().map(|c| c.weight).sum();
        assert!((weight_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn substituted_weights_change_only_the_combination() {
        let skills_only = ScoringWeights::new(1.0, 0.0, 0.0, 0.0).expect("valid weights");
        let result = MatchScorer::new(skills_only)
            .score(&job(), &applicant())
            .expect("scores");
        assert_eq!(result.score, 75);
        assert_eq!(result.sub_score(MatchCategory::Experience), Some(100.0));
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_score(62.5), 63);
        assert_eq!(round_score(62.49), 62);
        assert_eq!(round_score(0.0), 0);
        assert_eq!(round_score(100.0), 100);
        assert_eq!(round_score(f64::NAN), 0);
    }

    #[test]
    fn invalid_applicant_is_rejected() {
        let mut applicant = applicant();
        applicant.years_of_experience = f64::NAN;
        assert!(matches!(
            score_match(&job(), &applicant),
            Err(ValidationError::InvalidYearsOfExperience(_))
        ));
    }

    #[test]
    fn notes_describe_each_category() {
        let job = job().with_location("Berlin");
        let result = score_match(&job, &applicant()).expect("scores");
        let notes: Vec<&str> = result.components.iter().map(|c| c.notes.as_str()).collect();
        assert_eq!(notes[0], "3 of 4 required skills matched");
        assert_eq!(notes[1], "required MID, applicant MID");
        assert_eq!(notes[3], "job in Berlin, applicant location unknown");
    }

    #[test]
    fn remote_jobs_are_described_as_remote() {
        let job = job().with_location("Remote (EU)");
        let result = score_match(&job, &applicant()).expect("scores");
        let location = &result.components[3];
        assert_eq!(location.score, 100.0);
        assert_eq!(location.notes, "remote job (Remote (EU))");

        let located = score_match(&job, &applicant().with_location("Lisbon")).expect("scores");
        assert_eq!(located.components[3].notes, "remote job (Remote (EU))");
    }
}
