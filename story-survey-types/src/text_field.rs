use std::fmt;
use std::str::FromStr;

use crate::Section;

/// Error returned when a string does not name a free-text field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown survey field: {0}")]
pub struct ParseFieldError(String);

/// A free-text field of the draft.
///
/// Used as the key when editing text answers. Each field belongs to exactly
/// one section and has a snake_case name matching the stored column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextField {
    Name,
    Email,
    /// Companion to `Relationship::Other`.
    RelationshipOther,
    TypicalDay,
    DifficultyReason,
    EmotionalChallenge,
    IsolationFeeling,
    RelationshipLearning,
    ConnectionMoment,
    LoveMemory,
    CopingMethods,
    TalkToWhom,
    /// Companion to `SupportSystem::Other`.
    SupportSystemsOther,
    MissingSupport,
    ExtraHour,
    LostActivity,
    AdditionalSharing,
}

impl TextField {
    /// Every text field in form order.
    pub const ALL: [Self; 17] = [
        Self::Name,
        Self::Email,
        Self::RelationshipOther,
        Self::TypicalDay,
        Self::DifficultyReason,
        Self::EmotionalChallenge,
        Self::IsolationFeeling,
        Self::RelationshipLearning,
        Self::ConnectionMoment,
        Self::LoveMemory,
        Self::CopingMethods,
        Self::TalkToWhom,
        Self::SupportSystemsOther,
        Self::MissingSupport,
        Self::ExtraHour,
        Self::LostActivity,
        Self::AdditionalSharing,
    ];

    /// The thirteen narrative answers, in form order.
    pub const NARRATIVES: [Self; 13] = [
        Self::TypicalDay,
        Self::DifficultyReason,
        Self::EmotionalChallenge,
        Self::IsolationFeeling,
        Self::RelationshipLearning,
        Self::ConnectionMoment,
        Self::LoveMemory,
        Self::CopingMethods,
        Self::TalkToWhom,
        Self::MissingSupport,
        Self::ExtraHour,
        Self::LostActivity,
        Self::AdditionalSharing,
    ];

    /// The snake_case field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::RelationshipOther => "relationship_other",
            Self::TypicalDay => "typical_day",
            Self::DifficultyReason => "difficulty_reason",
            Self::EmotionalChallenge => "emotional_challenge",
            Self::IsolationFeeling => "isolation_feeling",
            Self::RelationshipLearning => "relationship_learning",
            Self::ConnectionMoment => "connection_moment",
            Self::LoveMemory => "love_memory",
            Self::CopingMethods => "coping_methods",
            Self::TalkToWhom => "talk_to_whom",
            Self::SupportSystemsOther => "support_systems_other",
            Self::MissingSupport => "missing_support",
            Self::ExtraHour => "extra_hour",
            Self::LostActivity => "lost_activity",
            Self::AdditionalSharing => "additional_sharing",
        }
    }

    /// Title-cased label, e.g. "Typical Day".
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::RelationshipOther => "Relationship Other",
            Self::TypicalDay => "Typical Day",
            Self::DifficultyReason => "Difficulty Reason",
            Self::EmotionalChallenge => "Emotional Challenge",
            Self::IsolationFeeling => "Isolation Feeling",
            Self::RelationshipLearning => "Relationship Learning",
            Self::ConnectionMoment => "Connection Moment",
            Self::LoveMemory => "Love Memory",
            Self::CopingMethods => "Coping Methods",
            Self::TalkToWhom => "Talk To Whom",
            Self::SupportSystemsOther => "Support Systems Other",
            Self::MissingSupport => "Missing Support",
            Self::ExtraHour => "Extra Hour",
            Self::LostActivity => "Lost Activity",
            Self::AdditionalSharing => "Additional Sharing",
        }
    }

    /// The section that asks for this field.
    pub fn section(self) -> Section {
        match self {
            Self::Name | Self::Email => Section::Contact,
            Self::RelationshipOther | Self::TypicalDay | Self::DifficultyReason => {
                Section::Journey
            }
            Self::EmotionalChallenge
            | Self::IsolationFeeling
            | Self::RelationshipLearning
            | Self::ConnectionMoment
            | Self::LoveMemory => Section::EmotionalLandscape,
            Self::CopingMethods
            | Self::TalkToWhom
            | Self::SupportSystemsOther
            | Self::MissingSupport
            | Self::ExtraHour
            | Self::LostActivity => Section::CopingAndCommunity,
            Self::AdditionalSharing => Section::OpenSharing,
        }
    }

    /// Whether this field only applies when an "Other" option is selected.
    pub fn is_companion(self) -> bool {
        matches!(self, Self::RelationshipOther | Self::SupportSystemsOther)
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}
