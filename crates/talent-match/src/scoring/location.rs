use super::{normalize_label, FULL_SCORE, NEUTRAL_SCORE};

const PARTIAL_MATCH: f64 = 80.0;
const MISMATCH: f64 = 30.0;

/// Lexical location comparison. No geocoding: "Berlin" and "Potsdam" are simply different.
pub fn compare(job: Option<&str>, applicant: Option<&str>) -> f64 {
    let Some(job) = job.filter(|location| !location.is_empty()) else {
        return FULL_SCORE;
    };
    if is_remote(job) {
        return FULL_SCORE;
    }

    let Some(applicant) = applicant.filter(|location| !location.is_empty()) else {
        return NEUTRAL_SCORE;
    };

    let job = normalize_label(job);
    let applicant = normalize_label(applicant);

    if job == applicant {
        FULL_SCORE
    } else if job.contains(applicant.as_str()) || applicant.contains(job.as_str()) {
        PARTIAL_MATCH
    } else {
        MISMATCH
    }
}

/// A job whose location mentions "remote" in any casing accepts applicants from anywhere.
pub(crate) fn is_remote(job: &str) -> bool {
    job.to_lowercase().contains("remote")
}
