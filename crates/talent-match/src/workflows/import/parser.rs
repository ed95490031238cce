use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::scoring::{ApplicantProfile, Ordinal};
use crate::workflows::applications::{ApplicantId, ApplicantSnapshot};

use super::ImportError;

const SKILL_SEPARATOR: char = ';';

pub(crate) fn parse_applicants<R: Read>(
    mut reader: R,
) -> Result<Vec<ApplicantSnapshot>, ImportError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw.as_slice());
    let headers = csv_reader.headers()?.clone();
    let mut lines = LineTracker::new(&raw);
    let mut applicants = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = lines.record_line(record.position().map_or(0, |position| position.byte()));
        let row: ApplicantRow = record.deserialize(Some(&headers))?;
        let snapshot = row.into_snapshot();
        snapshot
            .profile
            .validate()
            .map_err(|source| ImportError::Validation { line, source })?;
        applicants.push(snapshot);
    }

    Ok(applicants)
}

/// Resolves the 1-based line a record starts on. The reader stamps a record with the offset
/// where it started looking for it, which can sit before skipped blank lines or the `\n` of a
/// CRLF terminator, so those bytes are stepped over first.
struct LineTracker<'a> {
    data: &'a [u8],
    offset: usize,
    line: usize,
}

impl<'a> LineTracker<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            line: 1,
        }
    }

    /// Offsets must be passed in increasing order.
    fn record_line(&mut self, byte: u64) -> usize {
        let mut start =
            usize::try_from(byte).map_or(self.data.len(), |byte| byte.min(self.data.len()));
        while matches!(self.data.get(start), Some(b'\r' | b'\n')) {
            start += 1;
        }
        let start = start.max(self.offset);
        self.line += self.data[self.offset..start]
            .iter()
            .filter(|&&byte| byte == b'\n')
            .count();
        self.offset = start;
        self.line
    }
}

#[derive(Debug, Deserialize)]
struct ApplicantRow {
    applicant_id: String,
    #[serde(default)]
    skills: String,
    experience_level: String,
    years_of_experience: f64,
    education_level: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
}

impl ApplicantRow {
    fn into_snapshot(self) -> ApplicantSnapshot {
        let skills = self
            .skills
            .split(SKILL_SEPARATOR)
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();

        ApplicantSnapshot {
            id: ApplicantId(self.applicant_id),
            profile: ApplicantProfile {
                skills,
                experience_level: Ordinal::parse(self.experience_level),
                years_of_experience: self.years_of_experience,
                education_level: Ordinal::parse(self.education_level),
                location: self.location,
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
