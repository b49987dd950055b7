//! Core types for the problem collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Problem difficulty. Closed set; anything unrecognized is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Difficulty {
    /// All variants in display order.
    pub const ALL: [Difficulty; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Unknown];

    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unknown => "Unknown",
        }
    }

    /// Fixed sort ordinal: Easy < Medium < Hard < Unknown.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
            Self::Unknown => 3,
        }
    }

    /// Normalize a front-matter value. Case-insensitive; unrecognized
    /// values become `Unknown`.
    pub fn normalize(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Strict parse used for query parameters (exact variant names).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            "Unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A normalized problem parsed from one markdown file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub slug: String,
    pub title: String,
    pub number: Option<u32>,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub date: Option<String>,
    pub url: String,
    pub body: String,
    pub filename: String,
}

impl Problem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_case_insensitive() {
        assert_eq!(Difficulty::normalize("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::normalize(" HARD "), Difficulty::Hard);
        assert_eq!(Difficulty::normalize("Medium"), Difficulty::Medium);
    }

    #[test]
    fn normalize_unrecognized_is_unknown() {
        assert_eq!(Difficulty::normalize("brutal"), Difficulty::Unknown);
        assert_eq!(Difficulty::normalize(""), Difficulty::Unknown);
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("hard".parse::<Difficulty>().is_err());
    }

    #[test]
    fn ordinal_order() {
        let ordinals: Vec<u8> = Difficulty::ALL.iter().map(|d| d.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn serializes_as_variant_name() {
        let yaml = serde_yaml::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(yaml.trim(), "Medium");
    }
}
