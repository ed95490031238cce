use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Finite, linearly ordered scale whose members are compared by position.
pub trait OrdinalScale: Copy + Eq + fmt::Debug + 'static {
    /// Every level, lowest first.
    const LEVELS: &'static [Self];

    /// Uppercase code used on the wire.
    fn code(self) -> &'static str;

    /// Zero-based position on the scale.
    fn rank(self) -> u8;

    /// Case-insensitive lookup by code. Surrounding whitespace is significant.
    fn from_code(raw: &str) -> Option<Self> {
        let upper = raw.to_uppercase();
        Self::LEVELS
            .iter()
            .copied()
            .find(|level| level.code() == upper)
    }
}

/// Seniority expected of, or claimed by, a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Lead,
}

impl OrdinalScale for ExperienceLevel {
    const LEVELS: &'static [Self] = &[
        ExperienceLevel::Entry,
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];

    fn code(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "ENTRY",
            ExperienceLevel::Junior => "JUNIOR",
            ExperienceLevel::Mid => "MID",
            ExperienceLevel::Senior => "SENIOR",
            ExperienceLevel::Lead => "LEAD",
        }
    }

    fn rank(self) -> u8 {
        self as u8
    }
}

/// Highest completed education.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Phd,
}

impl OrdinalScale for EducationLevel {
    const LEVELS: &'static [Self] = &[
        EducationLevel::HighSchool,
        EducationLevel::Associate,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Phd,
    ];

    fn code(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "HIGH_SCHOOL",
            EducationLevel::Associate => "ASSOCIATE",
            EducationLevel::Bachelor => "BACHELOR",
            EducationLevel::Master => "MASTER",
            EducationLevel::Phd => "PHD",
        }
    }

    fn rank(self) -> u8 {
        self as u8
    }
}

/// A level as received from a caller: either a member of the scale or the raw text that
/// could not be placed on it. Unrecognized values are kept so they can be reported back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ordinal<L> {
    Known(L),
    Unrecognized(String),
}

impl<L: OrdinalScale> Ordinal<L> {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match L::from_code(&raw) {
            Some(level) => Ordinal::Known(level),
            None => Ordinal::Unrecognized(raw),
        }
    }

    pub fn known(&self) -> Option<L> {
        match self {
            Ordinal::Known(level) => Some(*level),
            Ordinal::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Ordinal::Known(level) => level.code(),
            Ordinal::Unrecognized(raw) => raw,
        }
    }
}

impl<L: OrdinalScale> From<L> for Ordinal<L> {
    fn from(level: L) -> Self {
        Ordinal::Known(level)
    }
}

impl<L: OrdinalScale> fmt::Display for Ordinal<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ordinal::Known(level) => f.write_str(level.code()),
            Ordinal::Unrecognized(raw) => write!(f, "unrecognized '{raw}'"),
        }
    }
}

impl<L: OrdinalScale> Serialize for Ordinal<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, L: OrdinalScale> Deserialize<'de> for Ordinal<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Ordinal::parse(raw))
    }
}
