use super::levels::{ExperienceLevel, Ordinal, OrdinalScale};
use super::{FULL_SCORE, NEUTRAL_SCORE};

const ONE_LEVEL_APART: f64 = 80.0;
const OVERQUALIFIED: f64 = 90.0;
const TWO_LEVELS_BELOW: f64 = 50.0;
const FAR_BELOW: f64 = 30.0;

/// Sub-score for how the applicant's seniority relates to the required one.
///
/// The checks run in a fixed order: an exact match, then any one-level gap in either
/// direction, then over-qualification at any distance, then the under-qualified bands.
/// A one-level over-qualification therefore scores 80 while a larger one scores 90.
pub fn compare(
    required: &Ordinal<ExperienceLevel>,
    applicant: &Ordinal<ExperienceLevel>,
) -> f64 {
    let (Some(required), Some(applicant)) = (required.known(), applicant.known()) else {
        return NEUTRAL_SCORE;
    };

    let required = i16::from(required.rank());
    let applicant = i16::from(applicant.rank());
    let distance = (required - applicant).abs();

    if distance == 0 {
        FULL_SCORE
    } else if distance == 1 {
        ONE_LEVEL_APART
    } else if applicant > required {
        OVERQUALIFIED
    } else if distance == 2 {
        TWO_LEVELS_BELOW
    } else {
        FAR_BELOW
    }
}
