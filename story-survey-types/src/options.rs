use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a label does not name any option of a fixed choice list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{label}' is not a valid {kind}")]
pub struct ParseOptionError {
    kind: &'static str,
    label: String,
}

impl ParseOptionError {
    fn new(kind: &'static str, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
        }
    }
}

/// How the respondent is related to the person they care for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    #[serde(rename = "Spouse/Partner")]
    SpousePartner,
    #[serde(rename = "Adult Child")]
    AdultChild,
    Parent,
    Sibling,
    /// Anything else; the respondent describes it in free text.
    Other,
}

impl Relationship {
    /// All options in the order they are offered.
    pub const ALL: [Self; 5] = [
        Self::SpousePartner,
        Self::AdultChild,
        Self::Parent,
        Self::Sibling,
        Self::Other,
    ];

    /// The label shown to the respondent and stored in the record.
    pub fn label(self) -> &'static str {
        match self {
            Self::SpousePartner => "Spouse/Partner",
            Self::AdultChild => "Adult Child",
            Self::Parent => "Parent",
            Self::Sibling => "Sibling",
            Self::Other => "Other",
        }
    }

    /// Whether choosing this option requires a free-text description.
    pub fn is_other(self) -> bool {
        self == Self::Other
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Relationship {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| ParseOptionError::new("relationship", s))
    }
}

/// How long the respondent has been a caregiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaregivingDuration {
    #[serde(rename = "Less than 6 months")]
    UnderSixMonths,
    #[serde(rename = "6-12 months")]
    SixToTwelveMonths,
    #[serde(rename = "1-3 years")]
    OneToThreeYears,
    #[serde(rename = "3-5 years")]
    ThreeToFiveYears,
    #[serde(rename = "More than 5 years")]
    OverFiveYears,
}

impl CaregivingDuration {
    /// All buckets, shortest first.
    pub const ALL: [Self; 5] = [
        Self::UnderSixMonths,
        Self::SixToTwelveMonths,
        Self::OneToThreeYears,
        Self::ThreeToFiveYears,
        Self::OverFiveYears,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::UnderSixMonths => "Less than 6 months",
            Self::SixToTwelveMonths => "6-12 months",
            Self::OneToThreeYears => "1-3 years",
            Self::ThreeToFiveYears => "3-5 years",
            Self::OverFiveYears => "More than 5 years",
        }
    }
}

impl fmt::Display for CaregivingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaregivingDuration {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| ParseOptionError::new("caregiving duration", s))
    }
}

/// A kind of support the respondent has tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportSystem {
    #[serde(rename = "Online support groups")]
    OnlineSupportGroups,
    #[serde(rename = "In-person therapy")]
    InPersonTherapy,
    #[serde(rename = "Friends/Family")]
    FriendsFamily,
    #[serde(rename = "Respite care")]
    RespiteCare,
    Nothing,
    /// Anything else; the respondent describes it in free text.
    Other,
}

impl SupportSystem {
    /// All options in the order they are offered.
    pub const ALL: [Self; 6] = [
        Self::OnlineSupportGroups,
        Self::InPersonTherapy,
        Self::FriendsFamily,
        Self::RespiteCare,
        Self::Nothing,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::OnlineSupportGroups => "Online support groups",
            Self::InPersonTherapy => "In-person therapy",
            Self::FriendsFamily => "Friends/Family",
            Self::RespiteCare => "Respite care",
            Self::Nothing => "Nothing",
            Self::Other => "Other",
        }
    }

    pub fn is_other(self) -> bool {
        self == Self::Other
    }
}

impl fmt::Display for SupportSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SupportSystem {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| ParseOptionError::new("support system", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for relationship in Relationship::ALL {
            assert_eq!(relationship.label().parse::<Relationship>(), Ok(relationship));
        }
        for duration in CaregivingDuration::ALL {
            assert_eq!(duration.label().parse::<CaregivingDuration>(), Ok(duration));
        }
        for system in SupportSystem::ALL {
            assert_eq!(system.label().parse::<SupportSystem>(), Ok(system));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Cousin".parse::<Relationship>().unwrap_err();
        assert_eq!(err.to_string(), "'Cousin' is not a valid relationship");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&SupportSystem::FriendsFamily).unwrap();
        assert_eq!(json, "\"Friends/Family\"");

        let parsed: CaregivingDuration = serde_json::from_str("\"1-3 years\"").unwrap();
        assert_eq!(parsed, CaregivingDuration::OneToThreeYears);
    }

    #[test]
    fn only_other_needs_description() {
        assert!(Relationship::Other.is_other());
        assert!(!Relationship::Sibling.is_other());
        assert!(SupportSystem::Other.is_other());
        assert!(!SupportSystem::Nothing.is_other());
    }
}
