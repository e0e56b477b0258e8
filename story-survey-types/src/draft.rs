use std::ops::RangeInclusive;

use crate::{
    CaregivingDuration, DifficultyRating, Relationship, SupportSystem, SupportSystems, TextField,
};

/// Ages the age prompt hints at. Not enforced.
pub const AGE_HINT: RangeInclusive<u8> = 18..=120;

/// A single edit to the draft.
///
/// Key and value travel together, so every update is well-typed and applying
/// one always succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Text(TextField, String),
    Age(Option<u8>),
    Relationship(Option<Relationship>),
    Duration(Option<CaregivingDuration>),
    DifficultyRating(DifficultyRating),
}

impl FieldUpdate {
    /// Shorthand for a text update.
    pub fn text(field: TextField, value: impl Into<String>) -> Self {
        Self::Text(field, value.into())
    }
}

/// The in-progress survey response for one session.
///
/// Every field starts empty (the rating starts at 5). Nothing here checks that
/// required answers are present; that happens when leaving a section.
///
/// The "Other" companion texts are only kept while their parent selection is
/// "Other": deselecting clears them and writes made without the parent
/// selected are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseDraft {
    name: String,
    email: String,
    age: Option<u8>,
    relationship: Option<Relationship>,
    relationship_other: String,
    duration: Option<CaregivingDuration>,
    typical_day: String,
    difficulty_rating: DifficultyRating,
    difficulty_reason: String,
    emotional_challenge: String,
    isolation_feeling: String,
    relationship_learning: String,
    connection_moment: String,
    love_memory: String,
    coping_methods: String,
    talk_to_whom: String,
    support_systems: SupportSystems,
    support_systems_other: String,
    missing_support: String,
    extra_hour: String,
    lost_activity: String,
    additional_sharing: String,
}

impl ResponseDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one edit.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Text(field, value) => {
                self.set_text(field, value);
            }
            FieldUpdate::Age(age) => self.age = age,
            FieldUpdate::Relationship(relationship) => self.set_relationship(relationship),
            FieldUpdate::Duration(duration) => self.duration = duration,
            FieldUpdate::DifficultyRating(rating) => self.difficulty_rating = rating,
        }
    }

    /// Write a text field.
    ///
    /// Returns `false` when the write was dropped because the field is an
    /// "Other" companion whose parent selection is not "Other".
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) -> bool {
        match field {
            TextField::RelationshipOther if !self.relationship.is_some_and(Relationship::is_other) => {
                return false;
            }
            TextField::SupportSystemsOther if !self.support_systems.includes_other() => {
                return false;
            }
            _ => {}
        }
        *self.text_mut(field) = value.into();
        true
    }

    /// Choose (or clear) the relationship. Anything but "Other" clears the
    /// relationship description.
    pub fn set_relationship(&mut self, relationship: Option<Relationship>) {
        self.relationship = relationship;
        if !relationship.is_some_and(Relationship::is_other) {
            self.relationship_other.clear();
        }
    }

    /// Select or deselect a support system. Deselecting "Other" clears its
    /// description.
    pub fn set_support_system(&mut self, system: SupportSystem, included: bool) {
        if included {
            self.support_systems.insert(system);
        } else {
            self.support_systems.remove(system);
            if system.is_other() {
                self.support_systems_other.clear();
            }
        }
    }

    /// The current value of a text field.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::RelationshipOther => &self.relationship_other,
            TextField::TypicalDay => &self.typical_day,
            TextField::DifficultyReason => &self.difficulty_reason,
            TextField::EmotionalChallenge => &self.emotional_challenge,
            TextField::IsolationFeeling => &self.isolation_feeling,
            TextField::RelationshipLearning => &self.relationship_learning,
            TextField::ConnectionMoment => &self.connection_moment,
            TextField::LoveMemory => &self.love_memory,
            TextField::CopingMethods => &self.coping_methods,
            TextField::TalkToWhom => &self.talk_to_whom,
            TextField::SupportSystemsOther => &self.support_systems_other,
            TextField::MissingSupport => &self.missing_support,
            TextField::ExtraHour => &self.extra_hour,
            TextField::LostActivity => &self.lost_activity,
            TextField::AdditionalSharing => &self.additional_sharing,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::RelationshipOther => &mut self.relationship_other,
            TextField::TypicalDay => &mut self.typical_day,
            TextField::DifficultyReason => &mut self.difficulty_reason,
            TextField::EmotionalChallenge => &mut self.emotional_challenge,
            TextField::IsolationFeeling => &mut self.isolation_feeling,
            TextField::RelationshipLearning => &mut self.relationship_learning,
            TextField::ConnectionMoment => &mut self.connection_moment,
            TextField::LoveMemory => &mut self.love_memory,
            TextField::CopingMethods => &mut self.coping_methods,
            TextField::TalkToWhom => &mut self.talk_to_whom,
            TextField::SupportSystemsOther => &mut self.support_systems_other,
            TextField::MissingSupport => &mut self.missing_support,
            TextField::ExtraHour => &mut self.extra_hour,
            TextField::LostActivity => &mut self.lost_activity,
            TextField::AdditionalSharing => &mut self.additional_sharing,
        }
    }

    /// Whether a text field holds something other than whitespace.
    pub fn has_text(&self, field: TextField) -> bool {
        !self.text(field).trim().is_empty()
    }

    pub fn age(&self) -> Option<u8> {
        self.age
    }

    pub fn relationship(&self) -> Option<Relationship> {
        self.relationship
    }

    pub fn duration(&self) -> Option<CaregivingDuration> {
        self.duration
    }

    pub fn difficulty_rating(&self) -> DifficultyRating {
        self.difficulty_rating
    }

    pub fn support_systems(&self) -> &SupportSystems {
        &self.support_systems
    }
}
