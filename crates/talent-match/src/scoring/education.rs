use super::levels::{EducationLevel, Ordinal, OrdinalScale};
use super::{FULL_SCORE, NEUTRAL_SCORE};

const ONE_LEVEL_BELOW: f64 = 70.0;
const FAR_BELOW: f64 = 40.0;

/// Sub-score for education. Meeting or exceeding the requirement scores full; unlike
/// experience there is no adjustment for exceeding it.
pub fn compare(required: &Ordinal<EducationLevel>, applicant: &Ordinal<EducationLevel>) -> f64 {
    let (Some(required), Some(applicant)) = (required.known(), applicant.known()) else {
        return NEUTRAL_SCORE;
    };

    if applicant.rank() >= required.rank() {
        FULL_SCORE
    } else if required.rank() - applicant.rank() == 1 {
        ONE_LEVEL_BELOW
    } else {
        FAR_BELOW
    }
}
