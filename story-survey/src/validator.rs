//! Per-section completeness checks.
//!
//! Validation never produces an error: an incomplete section simply cannot be
//! left in the forward direction. Text counts as present only when it holds
//! something other than whitespace.

use std::fmt;

use story_survey_types::{ResponseDraft, Section, TextField};

/// Something a section needs before the respondent may continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// A text answer.
    Text(TextField),
    Relationship,
    Duration,
    /// At least one support system.
    SupportSystems,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(TextField::RelationshipOther) => {
                f.write_str("a description of your relationship")
            }
            Self::Text(TextField::SupportSystemsOther) => {
                f.write_str("a description of your other support")
            }
            Self::Text(field) => write!(f, "{}", field.label()),
            Self::Relationship => f.write_str("your relationship to the person you care for"),
            Self::Duration => f.write_str("how long you have been caregiving"),
            Self::SupportSystems => f.write_str("at least one support system"),
        }
    }
}

const CONTACT_TEXT: [TextField; 2] = [TextField::Name, TextField::Email];

const JOURNEY_TEXT: [TextField; 2] = [TextField::TypicalDay, TextField::DifficultyReason];

const EMOTIONAL_TEXT: [TextField; 5] = [
    TextField::EmotionalChallenge,
    TextField::IsolationFeeling,
    TextField::RelationshipLearning,
    TextField::ConnectionMoment,
    TextField::LoveMemory,
];

const COPING_TEXT: [TextField; 5] = [
    TextField::CopingMethods,
    TextField::TalkToWhom,
    TextField::MissingSupport,
    TextField::ExtraHour,
    TextField::LostActivity,
];

/// Whether `section` is complete for `draft`.
pub fn is_valid(section: Section, draft: &ResponseDraft) -> bool {
    missing_fields(section, draft).is_empty()
}

/// Everything `section` still needs, in display order.
pub fn missing_fields(section: Section, draft: &ResponseDraft) -> Vec<Requirement> {
    let mut missing = Vec::new();
    match section {
        Section::Contact => require_text(draft, &CONTACT_TEXT, &mut missing),
        Section::Journey => {
            match draft.relationship() {
                None => missing.push(Requirement::Relationship),
                Some(relationship)
                    if relationship.is_other() && !draft.has_text(TextField::RelationshipOther) =>
                {
                    missing.push(Requirement::Text(TextField::RelationshipOther));
                }
                Some(_) => {}
            }
            if draft.duration().is_none() {
                missing.push(Requirement::Duration);
            }
            // The difficulty rating always holds a value on the 1-10 scale.
            require_text(draft, &JOURNEY_TEXT, &mut missing);
        }
        Section::EmotionalLandscape => require_text(draft, &EMOTIONAL_TEXT, &mut missing),
        Section::CopingAndCommunity => {
            require_text(draft, &COPING_TEXT[..2], &mut missing);
            let systems = draft.support_systems();
            if systems.is_empty() {
                missing.push(Requirement::SupportSystems);
            } else if systems.includes_other() && !draft.has_text(TextField::SupportSystemsOther) {
                missing.push(Requirement::Text(TextField::SupportSystemsOther));
            }
            require_text(draft, &COPING_TEXT[2..], &mut missing);
        }
        Section::OpenSharing => {}
    }

    missing
}

fn require_text(draft: &ResponseDraft, fields: &[TextField], missing: &mut Vec<Requirement>) {
    missing.extend(
        fields
            .iter()
            .filter(|field| !draft.has_text(**field))
            .map(|field| Requirement::Text(*field)),
    );
}

/// The first section, in order, that is not complete.
pub fn first_invalid(draft: &ResponseDraft) -> Option<Section> {
    Section::ALL
        .into_iter()
        .find(|section| !is_valid(*section, draft))
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_survey_types::{CaregivingDuration, FieldUpdate, Relationship, SupportSystem};

    fn journey_complete() -> ResponseDraft {
        let mut draft = ResponseDraft::new();
        draft.set_relationship(Some(Relationship::Parent));
        draft.apply(FieldUpdate::Duration(Some(
            CaregivingDuration::OneToThreeYears,
        )));
        draft.set_text(TextField::TypicalDay, "Meds at seven, then breakfast.");
        draft.set_text(TextField::DifficultyReason, "No time for myself.");
        draft
    }

    fn coping_complete() -> ResponseDraft {
        let mut draft = ResponseDraft::new();
        for field in COPING_TEXT {
            draft.set_text(field, "something");
        }
        draft.set_support_system(SupportSystem::FriendsFamily, true);
        draft
    }

    #[test]
    fn contact_needs_name_and_email() {
        let mut draft = ResponseDraft::new();
        assert!(!is_valid(Section::Contact, &draft));
        draft.set_text(TextField::Name, "Asha");
        assert_eq!(
            missing_fields(Section::Contact, &draft),
            vec![Requirement::Text(TextField::Email)]
        );
        draft.set_text(TextField::Email, "a@x.com");
        assert!(is_valid(Section::Contact, &draft));
    }

    #[test]
    fn whitespace_only_does_not_count() {
        let mut draft = ResponseDraft::new();
        draft.set_text(TextField::Name, "  ");
        draft.set_text(TextField::Email, "\t");
        assert!(!is_valid(Section::Contact, &draft));
    }

    #[test]
    fn journey_missing_any_requirement_is_invalid() {
        assert!(is_valid(Section::Journey, &journey_complete()));

        let mut no_relationship = journey_complete();
        no_relationship.set_relationship(None);

        let mut no_duration = journey_complete();
        no_duration.apply(FieldUpdate::Duration(None));

        let mut no_typical_day = journey_complete();
        no_typical_day.set_text(TextField::TypicalDay, "");

        let mut no_reason = journey_complete();
        no_reason.set_text(TextField::DifficultyReason, "");

        for draft in [no_relationship, no_duration, no_typical_day, no_reason] {
            assert!(!is_valid(Section::Journey, &draft));
        }
    }

    #[test]
    fn filling_last_journey_field_flips_validity() {
        let mut draft = journey_complete();
        draft.set_text(TextField::DifficultyReason, "");
        assert!(!is_valid(Section::Journey, &draft));
        draft.set_text(TextField::DifficultyReason, "Sleepless nights.");
        assert!(is_valid(Section::Journey, &draft));
    }

    #[test]
    fn other_relationship_needs_description() {
        let mut draft = journey_complete();
        draft.set_relationship(Some(Relationship::Other));
        assert_eq!(
            missing_fields(Section::Journey, &draft),
            vec![Requirement::Text(TextField::RelationshipOther)]
        );

        draft.set_text(TextField::RelationshipOther, "Neighbour");
        assert!(is_valid(Section::Journey, &draft));

        draft.set_relationship(Some(Relationship::Sibling));
        assert!(is_valid(Section::Journey, &draft));
        assert_eq!(draft.text(TextField::RelationshipOther), "");
    }

    #[test]
    fn emotional_landscape_needs_all_five() {
        let mut draft = ResponseDraft::new();
        for field in &EMOTIONAL_TEXT[..4] {
            draft.set_text(*field, "answer");
        }
        assert!(!is_valid(Section::EmotionalLandscape, &draft));
        draft.set_text(TextField::LoveMemory, "Dancing in the kitchen.");
        assert!(is_valid(Section::EmotionalLandscape, &draft));
    }

    #[test]
    fn coping_needs_support_systems() {
        let mut draft = coping_complete();
        assert!(is_valid(Section::CopingAndCommunity, &draft));

        draft.set_support_system(SupportSystem::FriendsFamily, false);
        assert_eq!(
            missing_fields(Section::CopingAndCommunity, &draft),
            vec![Requirement::SupportSystems]
        );
    }

    #[test]
    fn other_support_needs_description_until_deselected() {
        let mut draft = coping_complete();
        draft.set_support_system(SupportSystem::Other, true);
        assert!(!is_valid(Section::CopingAndCommunity, &draft));

        draft.set_text(TextField::SupportSystemsOther, "Church group");
        assert!(is_valid(Section::CopingAndCommunity, &draft));

        draft.set_support_system(SupportSystem::Other, false);
        assert_eq!(draft.text(TextField::SupportSystemsOther), "");
        assert!(is_valid(Section::CopingAndCommunity, &draft));
    }

    #[test]
    fn open_sharing_is_always_valid() {
        assert!(is_valid(Section::OpenSharing, &ResponseDraft::new()));
    }

    #[test]
    fn first_invalid_scans_in_order() {
        let draft = journey_complete();
        assert_eq!(first_invalid(&draft), Some(Section::Contact));
    }

    #[test]
    fn requirement_display() {
        assert_eq!(
            Requirement::Text(TextField::TypicalDay).to_string(),
            "Typical Day"
        );
        assert_eq!(
            Requirement::SupportSystems.to_string(),
            "at least one support system"
        );
    }
}
