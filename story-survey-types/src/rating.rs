use std::fmt;

use serde::{Deserialize, Serialize};

/// Error for a rating outside the 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("difficulty rating must be between {min} and {max}, got {value}", min = DifficultyRating::MIN, max = DifficultyRating::MAX)]
pub struct RatingError {
    value: u8,
}

/// How difficult caregiving feels, on a scale of 1 to 10.
///
/// Always holds one of the ten discrete values. Defaults to 5 before the
/// respondent touches the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DifficultyRating(u8);

impl DifficultyRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Create a rating, rejecting values outside 1-10.
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError { value })
        }
    }

    /// The numeric rating.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every rating on the scale, lowest first.
    pub fn scale() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Default for DifficultyRating {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for DifficultyRating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DifficultyRating> for u8 {
    fn from(rating: DifficultyRating) -> Self {
        rating.0
    }
}

impl fmt::Display for DifficultyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
