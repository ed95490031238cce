use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::levels::{EducationLevel, ExperienceLevel, Ordinal};

/// What a job posting asks of its candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirement {
    pub required_skills: Vec<String>,
    pub experience_level: Ordinal<ExperienceLevel>,
    pub education_level: Ordinal<EducationLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl JobRequirement {
    pub fn new<I, S>(
        required_skills: I,
        experience_level: impl Into<Ordinal<ExperienceLevel>>,
        education_level: impl Into<Ordinal<EducationLevel>>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_skills: required_skills.into_iter().map(Into::into).collect(),
            experience_level: experience_level.into(),
            education_level: education_level.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, ValidationError> {
        parse_record("job requirement", serde_json::from_str(raw))
    }

    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        parse_record("job requirement", serde_json::from_value(value))
    }
}

/// What an applicant brings to a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub skills: Vec<String>,
    pub experience_level: Ordinal<ExperienceLevel>,
    /// Accepted and validated, not yet weighed by the scorer.
    pub years_of_experience: f64,
    pub education_level: Ordinal<EducationLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ApplicantProfile {
    pub fn new<I, S>(
        skills: I,
        experience_level: impl Into<Ordinal<ExperienceLevel>>,
        years_of_experience: f64,
        education_level: impl Into<Ordinal<EducationLevel>>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            experience_level: experience_level.into(),
            years_of_experience,
            education_level: education_level.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, ValidationError> {
        let profile: Self = parse_record("applicant profile", serde_json::from_str(raw))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let profile: Self = parse_record("applicant profile", serde_json::from_value(value))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.years_of_experience.is_finite() || self.years_of_experience < 0.0 {
            return Err(ValidationError::InvalidYearsOfExperience(
                self.years_of_experience,
            ));
        }
        Ok(())
    }
}

fn parse_record<T: DeserializeOwned>(
    record: &'static str,
    parsed: Result<T, serde_json::Error>,
) -> Result<T, ValidationError> {
    parsed.map_err(|source| ValidationError::Malformed { record, source })
}

/// Input that cannot be scored at all.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed {record}: {source}")]
    Malformed {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("yearsOfExperience must be a finite, non-negative number (found {0})")]
    InvalidYearsOfExperience(f64),
}
