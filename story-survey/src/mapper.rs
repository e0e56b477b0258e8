//! Flattening a finished draft into a `SurveyRecord`.
//!
//! The store has dedicated columns only for the structured answers. Every
//! narrative answer goes into `additional_comments` as a labelled paragraph,
//! preceded by the respondent's age.

use story_survey_types::{GENDER_PLACEHOLDER, ResponseDraft, SurveyRecord, TextField};

/// Separator between selected support systems in the `support_systems` column.
pub const SUPPORT_SEPARATOR: &str = ", ";

/// Separator between paragraphs of `additional_comments`.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Build the record to persist. Reads the draft without modifying it.
pub fn to_record(draft: &ResponseDraft) -> SurveyRecord {
    let relationship = draft.relationship();
    let systems = draft.support_systems();

    SurveyRecord {
        name: draft.text(TextField::Name).trim().to_string(),
        email: draft.text(TextField::Email).trim().to_string(),
        age_range: draft
            .duration()
            .map(|duration| duration.label().to_string())
            .unwrap_or_default(),
        gender: GENDER_PLACEHOLDER.to_string(),
        relationship_status: relationship
            .map(|r| r.label().to_string())
            .unwrap_or_default(),
        relationship_other: relationship
            .filter(|r| r.is_other())
            .and_then(|_| present_text(draft, TextField::RelationshipOther)),
        support_systems: systems.join(SUPPORT_SEPARATOR),
        support_other: if systems.includes_other() {
            present_text(draft, TextField::SupportSystemsOther)
        } else {
            None
        },
        stress_level: draft.difficulty_rating().get(),
        additional_comments: comments(draft),
    }
}

fn present_text(draft: &ResponseDraft, field: TextField) -> Option<String> {
    draft
        .has_text(field)
        .then(|| draft.text(field).trim().to_string())
}

/// The age line followed by each answered narrative, blank-line separated.
fn comments(draft: &ResponseDraft) -> String {
    let age = match draft.age() {
        Some(age) => age.to_string(),
        None => "Not provided".to_string(),
    };

    std::iter::once(format!("Age: {age}"))
        .chain(
            TextField::NARRATIVES
                .into_iter()
                .filter_map(|field| {
                    present_text(draft, field).map(|answer| format!("{}: {answer}", field.label()))
                }),
        )
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_survey_types::{
        CaregivingDuration, DifficultyRating, FieldUpdate, Relationship, SupportSystem,
    };

    fn sample() -> ResponseDraft {
        let mut draft = ResponseDraft::new();
        draft.set_text(TextField::Name, " Asha ");
        draft.set_text(TextField::Email, "a@x.com");
        draft.apply(FieldUpdate::Age(Some(52)));
        draft.set_relationship(Some(Relationship::SpousePartner));
        draft.apply(FieldUpdate::Duration(Some(CaregivingDuration::ThreeToFiveYears)));
        draft.apply(FieldUpdate::DifficultyRating(
            DifficultyRating::new(7).unwrap(),
        ));
        draft.set_text(TextField::TypicalDay, "Up at six.");
        draft.set_text(TextField::LoveMemory, "Our first trip to the sea.");
        draft.set_support_system(SupportSystem::FriendsFamily, true);
        draft.set_support_system(SupportSystem::RespiteCare, true);
        draft
    }

    #[test]
    fn structured_columns() {
        let record = to_record(&sample());
        assert_eq!(record.name, "Asha");
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.age_range, "3-5 years");
        assert_eq!(record.gender, "not-specified");
        assert_eq!(record.relationship_status, "Spouse/Partner");
        assert_eq!(record.relationship_other, None);
        assert_eq!(record.support_systems, "Friends/Family, Respite care");
        assert_eq!(record.support_other, None);
        assert_eq!(record.stress_level, 7);
    }

    #[test]
    fn comments_skip_empty_answers() {
        let record = to_record(&sample());
        assert_eq!(
            record.additional_comments,
            "Age: 52\n\nTypical Day: Up at six.\n\nLove Memory: Our first trip to the sea."
        );
    }

    #[test]
    fn missing_age_is_noted() {
        let mut draft = sample();
        draft.apply(FieldUpdate::Age(None));
        let record = to_record(&draft);
        assert!(record.additional_comments.starts_with("Age: Not provided\n\n"));
    }

    #[test]
    fn additional_sharing_is_last() {
        let mut draft = sample();
        draft.set_text(TextField::AdditionalSharing, "Thank you for listening.");
        let record = to_record(&draft);
        assert!(
            record
                .additional_comments
                .ends_with("\n\nAdditional Sharing: Thank you for listening.")
        );
    }

    #[test]
    fn other_descriptions_are_carried() {
        let mut draft = sample();
        draft.set_relationship(Some(Relationship::Other));
        draft.set_text(TextField::RelationshipOther, "Neighbour");
        draft.set_support_system(SupportSystem::Other, true);
        draft.set_text(TextField::SupportSystemsOther, "Church group");

        let record = to_record(&draft);
        assert_eq!(record.relationship_status, "Other");
        assert_eq!(record.relationship_other.as_deref(), Some("Neighbour"));
        assert_eq!(record.support_other.as_deref(), Some("Church group"));
        assert_eq!(
            record.support_systems,
            "Friends/Family, Respite care, Other"
        );
    }

    #[test]
    fn mapping_leaves_draft_untouched() {
        let draft = sample();
        let before = draft.clone();
        let _ = to_record(&draft);
        assert_eq!(draft, before);
    }

    #[test]
    fn empty_draft_maps_to_blank_columns() {
        let record = to_record(&ResponseDraft::new());
        assert_eq!(record.name, "");
        assert_eq!(record.relationship_status, "");
        assert_eq!(record.support_systems, "");
        assert_eq!(record.stress_level, 5);
        assert_eq!(record.additional_comments, "Age: Not provided");
    }
}
