use super::{normalize_label, FULL_SCORE};

/// Outcome of comparing required skills with an applicant's skills.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsComparison {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Share of distinct required skills that the applicant covers, as 0-100.
///
/// A requirement is covered when, after trimming and lowercasing, some applicant skill
/// contains it or is contained by it, so "node" covers "Node.js" and "c" covers "C++".
/// Requirements that normalize to the same label count once; the first spelling is the one
/// reported in `matched`/`missing`.
pub fn compare(required: &[String], applicant: &[String]) -> SkillsComparison {
    let mut seen: Vec<String> = Vec::with_capacity(required.len());
    let mut labels: Vec<&str> = Vec::with_capacity(required.len());
    for label in required {
        let normalized = normalize_label(label);
        if !seen.contains(&normalized) {
            seen.push(normalized);
            labels.push(label.trim());
        }
    }

    if seen.is_empty() {
        return SkillsComparison {
            score: FULL_SCORE,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let applicant: Vec<String> = applicant.iter().map(|skill| normalize_label(skill)).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for (normalized, label) in seen.iter().zip(labels) {
        let covered = applicant
            .iter()
            .any(|skill| skill.contains(normalized.as_str()) || normalized.contains(skill.as_str()));
        if covered {
            matched.push(label.to_string());
        } else {
            missing.push(label.to_string());
        }
    }

    let score = (matched.len() as f64 / seen.len() as f64) * FULL_SCORE;

    SkillsComparison {
        score,
        matched,
        missing,
    }
}
