use super::MatchCategory;

const SUM_TOLERANCE: f64 = 1e-9;

/// Weights applied to each category when the sub-scores are combined.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    skills: 0.40,
    experience: 0.30,
    education: 0.20,
    location: 0.10,
};

/// Immutable set of category weights. Construction guarantees every weight is finite and
/// non-negative and that the four of them sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    skills: f64,
    experience: f64,
    education: f64,
    location: f64,
}

impl ScoringWeights {
    pub fn new(
        skills: f64,
        experience: f64,
        education: f64,
        location: f64,
    ) -> Result<Self, WeightsError> {
        let weights = Self {
            skills,
            experience,
            education,
            location,
        };

        for category in MatchCategory::ALL {
            let value = weights.weight(category);
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { category });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { category, value });
            }
        }

        let sum = weights.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightsError::Sum(sum));
        }

        Ok(weights)
    }

    pub fn skills(&self) -> f64 {
        self.skills
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn education(&self) -> f64 {
        self.education
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn weight(&self, category: MatchCategory) -> f64 {
        match category {
            MatchCategory::Skills => self.skills,
            MatchCategory::Experience => self.experience,
            MatchCategory::Education => self.education,
            MatchCategory::Location => self.location,
        }
    }

    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.location
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Rejected weight configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightsError {
    #[error("{} weight must be a finite number", .category.label())]
    NonFinite { category: MatchCategory },
    #[error("{} weight must not be negative (found {value})", .category.label())]
    Negative { category: MatchCategory, value: f64 },
    #[error("weights must sum to 1.0 (found {0})")]
    Sum(f64),
}
