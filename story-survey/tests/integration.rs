//! Integration tests for story-survey

use std::sync::Arc;

use story_survey::test_sinks::{RecordingAnalytics, RecordingEffects, RecordingStore};
use story_survey::{
    CaregivingDuration, DifficultyRating, EffectDispatcher, FieldUpdate, FormController,
    NoticeKind, Page, PersistenceError, Relationship, Section, StorySite, SubmitOutcome,
    SupportSystem, TextField,
};

struct Harness {
    survey: FormController,
    store: Arc<RecordingStore>,
    analytics: Arc<RecordingAnalytics>,
    effects: Arc<RecordingEffects>,
}

fn harness(store: RecordingStore) -> Harness {
    let store = Arc::new(store);
    let analytics = Arc::new(RecordingAnalytics::new());
    let effects = Arc::new(RecordingEffects::new());
    let dispatcher = EffectDispatcher::new()
        .with_analytics(analytics.clone())
        .with_effects(effects.clone());
    Harness {
        survey: FormController::new(store.clone(), dispatcher),
        store,
        analytics,
        effects,
    }
}

fn fill_contact(survey: &FormController) {
    survey.set_text(TextField::Name, "Asha");
    survey.set_text(TextField::Email, "a@x.com");
}

fn fill_journey(survey: &FormController) {
    survey.set_field(FieldUpdate::Relationship(Some(Relationship::Parent)));
    survey.set_field(FieldUpdate::Duration(Some(CaregivingDuration::OneToThreeYears)));
    survey.set_text(TextField::TypicalDay, "Medication, meals, appointments.");
    survey.set_field(FieldUpdate::DifficultyRating(DifficultyRating::new(7).unwrap()));
    survey.set_text(TextField::DifficultyReason, "Never a day off.");
}

fn fill_emotional(survey: &FormController) {
    for field in Section::EmotionalLandscape.text_fields() {
        survey.set_text(field, "It is complicated.");
    }
}

fn fill_coping(survey: &FormController) {
    for field in Section::CopingAndCommunity.text_fields() {
        if !field.is_companion() {
            survey.set_text(field, "Long walks.");
        }
    }
    survey.set_support_system(SupportSystem::FriendsFamily, true);
}

/// Fill every section and walk to the last one.
fn complete_all_sections(survey: &FormController) {
    fill_contact(survey);
    assert!(survey.advance());
    fill_journey(survey);
    assert!(survey.advance());
    fill_emotional(survey);
    assert!(survey.advance());
    fill_coping(survey);
    assert!(survey.advance());
    assert_eq!(survey.section(), Section::OpenSharing);
}

#[test]
fn test_advance_never_passes_last_section() {
    let h = harness(RecordingStore::new());
    complete_all_sections(&h.survey);

    assert!(!h.survey.can_advance());
    assert!(!h.survey.advance());
    assert_eq!(h.survey.section(), Section::OpenSharing);
}

#[test]
fn test_advance_requires_each_section() {
    let h = harness(RecordingStore::new());
    fill_contact(&h.survey);
    assert!(h.survey.advance());

    // Journey is empty, so we stay.
    assert!(!h.survey.advance());
    assert_eq!(h.survey.section(), Section::Journey);

    fill_journey(&h.survey);
    assert!(h.survey.advance());
    assert_eq!(h.survey.section(), Section::EmotionalLandscape);
}

#[test]
fn test_retreat_is_never_gated() {
    let h = harness(RecordingStore::new());
    complete_all_sections(&h.survey);

    h.survey.set_text(TextField::Name, "");
    for expected in [
        Section::CopingAndCommunity,
        Section::EmotionalLandscape,
        Section::Journey,
        Section::Contact,
    ] {
        assert!(h.survey.retreat());
        assert_eq!(h.survey.section(), expected);
    }
    assert!(!h.survey.retreat());
    assert_eq!(h.survey.section(), Section::Contact);
}

#[test]
fn test_relationship_other_needs_description() {
    let h = harness(RecordingStore::new());
    fill_contact(&h.survey);
    h.survey.advance();
    fill_journey(&h.survey);

    h.survey
        .set_field(FieldUpdate::Relationship(Some(Relationship::Other)));
    assert!(!h.survey.can_advance());

    h.survey.set_text(TextField::RelationshipOther, "Family friend");
    assert!(h.survey.can_advance());

    h.survey
        .set_field(FieldUpdate::Relationship(Some(Relationship::Sibling)));
    assert!(h.survey.can_advance());
    assert_eq!(h.survey.draft().text(TextField::RelationshipOther), "");
}

#[test]
fn test_removing_other_support_clears_description() {
    let h = harness(RecordingStore::new());
    fill_contact(&h.survey);
    h.survey.advance();
    fill_journey(&h.survey);
    h.survey.advance();
    fill_emotional(&h.survey);
    h.survey.advance();
    fill_coping(&h.survey);
    assert!(h.survey.can_advance());

    h.survey.set_support_system(SupportSystem::Other, true);
    assert!(!h.survey.can_advance());
    h.survey.set_text(TextField::SupportSystemsOther, "Church group");
    assert!(h.survey.can_advance());

    h.survey.set_support_system(SupportSystem::Other, false);
    assert_eq!(h.survey.draft().text(TextField::SupportSystemsOther), "");
    assert!(h.survey.can_advance());
}

#[tokio::test]
async fn test_successful_submission() {
    let h = harness(RecordingStore::new());
    complete_all_sections(&h.survey);

    let outcome = h.survey.submit().await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Completed);
    assert!(h.survey.is_completed());
    assert!(!h.survey.is_submitting());

    let records = h.store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].stress_level, 7);
    assert!(records[0].support_systems.contains("Friends/Family"));
    assert_eq!(records[0].name, "Asha");

    assert_eq!(h.analytics.count("survey_completed"), 1);
    assert_eq!(h.effects.bursts().len(), 5);

    let notice = h.survey.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
}

#[tokio::test]
async fn test_completed_survey_is_frozen() {
    let h = harness(RecordingStore::new());
    complete_all_sections(&h.survey);
    h.survey.submit().await.unwrap();

    h.survey.set_text(TextField::Name, "Someone else");
    assert!(!h.survey.retreat());
    assert_eq!(h.survey.draft().text(TextField::Name), "Asha");

    let again = h.survey.submit().await.unwrap();
    assert_eq!(again, SubmitOutcome::AlreadyCompleted);
    assert_eq!(h.store.attempts(), 1);
    assert_eq!(h.analytics.count("survey_completed"), 1);

    assert!(h.survey.restart());
    assert!(!h.survey.is_completed());
    assert_eq!(h.survey.section(), Section::Contact);
}

#[tokio::test]
async fn test_failed_submission_keeps_draft() {
    let h = harness(RecordingStore::failing());
    complete_all_sections(&h.survey);
    let before = h.survey.draft();

    let err = h.survey.submit().await.unwrap_err();
    assert!(matches!(err, PersistenceError::Rejected { status: 503, .. }));

    assert!(!h.survey.is_completed());
    assert!(!h.survey.is_submitting());
    assert_eq!(h.survey.draft(), before);
    assert_eq!(h.survey.section(), Section::OpenSharing);
    assert_eq!(h.survey.notice().unwrap().kind, NoticeKind::Error);
    assert_eq!(h.analytics.count("survey_completed"), 0);
    assert!(h.effects.bursts().is_empty());
}

#[tokio::test]
async fn test_retry_after_failure() {
    let h = harness(RecordingStore::new().failing_times(2));
    complete_all_sections(&h.survey);

    assert!(h.survey.submit().await.is_err());
    assert!(h.survey.submit().await.is_err());
    assert_eq!(
        h.survey.submit().await.unwrap(),
        SubmitOutcome::Completed
    );
    assert_eq!(h.store.attempts(), 3);
    assert_eq!(h.store.records().len(), 1);
    assert_eq!(h.survey.notice().unwrap().kind, NoticeKind::Success);
}

#[tokio::test]
async fn test_second_submit_while_pending_is_rejected() {
    let (store, gate) = RecordingStore::new().gated();
    let h = harness(store);
    complete_all_sections(&h.survey);

    let (first, second, ()) = tokio::join!(h.survey.submit(), async {
        assert!(h.survey.is_submitting());
        h.survey.submit().await
    }, async {
        gate.release();
    });

    assert_eq!(first.unwrap(), SubmitOutcome::Completed);
    assert_eq!(second.unwrap(), SubmitOutcome::InFlight);
    assert_eq!(h.store.attempts(), 1);
    assert_eq!(h.store.records().len(), 1);
    assert_eq!(h.analytics.count("survey_completed"), 1);
}

#[tokio::test]
async fn test_edits_during_submission_do_not_leak_into_record() {
    let (store, gate) = RecordingStore::new().gated();
    let h = harness(store);
    complete_all_sections(&h.survey);

    let (outcome, ()) = tokio::join!(h.survey.submit(), async {
        h.survey
            .set_text(TextField::AdditionalSharing, "Typed while waiting");
        assert!(h.survey.retreat());
        assert!(!h.survey.advance());
        assert!(!h.survey.restart());
        gate.release();
    });

    assert_eq!(outcome.unwrap(), SubmitOutcome::Completed);
    let record = &h.store.records()[0];
    assert!(!record.additional_comments.contains("Typed while waiting"));
}

#[tokio::test]
async fn test_submit_refuses_invalid_earlier_section() {
    let h = harness(RecordingStore::new());
    complete_all_sections(&h.survey);
    h.survey.set_text(TextField::Email, "   ");

    let outcome = h.survey.submit().await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Incomplete(Section::Contact));
    assert_eq!(h.store.attempts(), 0);
}

#[tokio::test]
async fn test_abandoned_submission_can_be_retried() {
    let (store, gate) = RecordingStore::new().gated();
    let h = harness(store);
    complete_all_sections(&h.survey);

    tokio::select! {
        biased;
        _ = h.survey.submit() => panic!("insert should still be held"),
        _ = async {} => {}
    }

    assert!(!h.survey.is_submitting());
    assert!(!h.survey.is_completed());
    assert_eq!(h.store.attempts(), 1);

    gate.release();
    assert_eq!(h.survey.submit().await.unwrap(), SubmitOutcome::Completed);
    assert_eq!(h.store.records().len(), 1);
    assert_eq!(h.analytics.count("survey_completed"), 1);
}

#[tokio::test]
async fn test_abandoned_submission_allows_restart() {
    let (store, _gate) = RecordingStore::new().gated();
    let h = harness(store);
    complete_all_sections(&h.survey);

    tokio::select! {
        biased;
        _ = h.survey.submit() => panic!("insert should still be held"),
        _ = async {} => {}
    }

    assert!(h.survey.restart());
    assert_eq!(h.survey.section(), Section::Contact);
}

#[tokio::test]
async fn test_submit_only_from_last_section() {
    let h = harness(RecordingStore::new());
    complete_all_sections(&h.survey);
    while h.survey.retreat() {}

    let outcome = h.survey.submit().await.unwrap();
    assert_eq!(outcome, SubmitOutcome::NotOnLastSection(Section::Contact));
    assert_eq!(h.store.attempts(), 0);
    assert!(!h.survey.is_completed());
    assert_eq!(h.survey.notice(), None);
}

#[tokio::test]
async fn test_site_flow() {
    let store = Arc::new(RecordingStore::new());
    let analytics = Arc::new(RecordingAnalytics::new());
    let mut site = StorySite::new(
        store.clone(),
        EffectDispatcher::new().with_analytics(analytics.clone()),
    );

    let survey = site.start_survey();
    complete_all_sections(survey);
    survey.submit().await.unwrap();

    assert_eq!(site.page(), Page::ThankYou);
    site.schedule_conversation();
    assert!(site.back_to_story());
    assert_eq!(site.page(), Page::Story);

    assert_eq!(
        analytics.names(),
        vec!["survey_click", "survey_completed", "calendar_click"]
    );
    assert_eq!(store.records().len(), 1);
}
