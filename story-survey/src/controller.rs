use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use story_survey_types::{
    FieldUpdate, PersistenceError, PersistenceSink, ResponseDraft, Section, SupportSystem,
    TextField,
};

use crate::effects::EffectDispatcher;
use crate::{mapper, validator};

/// Whether a notice reports good news or a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the respondent, produced by a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    fn thank_you() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Thank you for sharing your story!",
            description: "Your voice matters and will help us build a supportive community.",
        }
    }

    fn submit_failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Something went wrong",
            description: "Please try again or contact us directly.",
        }
    }
}

/// What happened when `submit` was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The response was stored and the survey is complete.
    Completed,
    /// Another submission is still waiting on the store; nothing was sent.
    InFlight,
    /// The survey was already completed; nothing was sent.
    AlreadyCompleted,
    /// The respondent is not on the last section yet; nothing was sent.
    NotOnLastSection(Section),
    /// The given section is not complete; nothing was sent.
    Incomplete(Section),
}

#[derive(Debug, Default)]
struct FormState {
    section: Section,
    draft: ResponseDraft,
    submitting: bool,
    completed: bool,
    notice: Option<Notice>,
}

/// Clears the `submitting` flag if a submission is dropped before the store
/// answers, so an abandoned `submit` future cannot wedge the session.
struct SubmitGuard<'a> {
    state: &'a Mutex<FormState>,
    armed: bool,
}

impl SubmitGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::debug!("submission abandoned before the store answered");
            self.state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .submitting = false;
        }
    }
}

/// Drives one respondent through the survey.
///
/// Owns the draft, the current section and the submission status. Every
/// method takes `&self`: state lives behind a mutex that is never held while
/// waiting on the store, so edits keep working during a submission and a
/// second `submit` sees the first one in flight.
///
/// While a submission is in flight the draft stays editable and `retreat`
/// still works; `advance`, `submit` and `restart` are refused. Once the
/// survey is completed only `restart` has any effect.
pub struct FormController {
    state: Mutex<FormState>,
    store: Arc<dyn PersistenceSink>,
    effects: EffectDispatcher,
}

impl FormController {
    /// Start a new session with an empty draft on the first section.
    pub fn new(store: Arc<dyn PersistenceSink>, effects: EffectDispatcher) -> Self {
        Self {
            state: Mutex::new(FormState::default()),
            store,
            effects,
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply one edit to the draft. No validation happens here.
    pub fn set_field(&self, update: FieldUpdate) {
        let mut state = self.state();
        if state.completed {
            tracing::debug!(?update, "ignoring edit to a completed survey");
            return;
        }
        state.draft.apply(update);
    }

    /// Shorthand for `set_field(FieldUpdate::Text(..))`.
    pub fn set_text(&self, field: TextField, value: impl Into<String>) {
        self.set_field(FieldUpdate::Text(field, value.into()));
    }

    /// Select or deselect a support system. Deselecting "Other" clears its
    /// description.
    pub fn set_support_system(&self, system: SupportSystem, included: bool) {
        let mut state = self.state();
        if state.completed {
            return;
        }
        state.draft.set_support_system(system, included);
    }

    /// Move to the next section if the current one is complete.
    ///
    /// Returns whether the section changed.
    pub fn advance(&self) -> bool {
        let mut state = self.state();
        if state.completed || state.submitting {
            return false;
        }
        if !validator::is_valid(state.section, &state.draft) {
            tracing::debug!(section = ?state.section, "section incomplete, staying put");
            return false;
        }
        match state.section.next() {
            Some(next) => {
                tracing::debug!(from = ?state.section, to = ?next, "advancing");
                state.section = next;
                true
            }
            None => false,
        }
    }

    /// Move back one section. Never validates.
    ///
    /// Returns whether the section changed.
    pub fn retreat(&self) -> bool {
        let mut state = self.state();
        if state.completed {
            return false;
        }
        match state.section.previous() {
            Some(previous) => {
                tracing::debug!(from = ?state.section, to = ?previous, "retreating");
                state.section = previous;
                true
            }
            None => false,
        }
    }

    /// Store the response.
    ///
    /// Only allowed from the last section. Only one submission may be in
    /// flight; calls made meanwhile return `SubmitOutcome::InFlight` without
    /// touching the store. The record is built from the draft as it is when
    /// the call starts. Dropping the returned future before it finishes
    /// leaves the survey ready to submit again.
    ///
    /// A store failure is returned as an error and leaves the draft and
    /// section as they were, so the respondent can simply try again.
    pub async fn submit(&self) -> Result<SubmitOutcome, PersistenceError> {
        let record = {
            let mut state = self.state();
            if state.completed {
                return Ok(SubmitOutcome::AlreadyCompleted);
            }
            if state.submitting {
                tracing::debug!("submission already in flight");
                return Ok(SubmitOutcome::InFlight);
            }
            if !state.section.is_last() {
                return Ok(SubmitOutcome::NotOnLastSection(state.section));
            }
            if let Some(section) = validator::first_invalid(&state.draft) {
                return Ok(SubmitOutcome::Incomplete(section));
            }
            state.submitting = true;
            state.notice = None;
            mapper::to_record(&state.draft)
        };

        let guard = SubmitGuard {
            state: &self.state,
            armed: true,
        };
        let result = self.store.insert(&record).await;
        guard.disarm();

        let mut state = self.state();
        state.submitting = false;
        match result {
            Ok(()) => {
                tracing::info!("survey response stored");
                state.completed = true;
                state.notice = Some(Notice::thank_you());
                let draft = state.draft.clone();
                drop(state);
                self.effects.survey_completed(&draft);
                Ok(SubmitOutcome::Completed)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to store survey response");
                state.notice = Some(Notice::submit_failed());
                Err(err)
            }
        }
    }

    /// Throw the draft away and start over on the first section.
    ///
    /// Refused while a submission is in flight. Returns whether the survey
    /// was reset.
    pub fn restart(&self) -> bool {
        let mut state = self.state();
        if state.submitting {
            return false;
        }
        *state = FormState::default();
        true
    }

    pub fn section(&self) -> Section {
        self.state().section
    }

    /// A copy of the current draft.
    pub fn draft(&self) -> ResponseDraft {
        self.state().draft.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state().submitting
    }

    pub fn is_completed(&self) -> bool {
        self.state().completed
    }

    /// Whether `advance` would currently succeed.
    pub fn can_advance(&self) -> bool {
        let state = self.state();
        !state.completed
            && !state.submitting
            && !state.section.is_last()
            && validator::is_valid(state.section, &state.draft)
    }

    /// What the current section still needs.
    pub fn missing_fields(&self) -> Vec<validator::Requirement> {
        let state = self.state();
        validator::missing_fields(state.section, &state.draft)
    }

    /// The message from the last submission attempt, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.state().notice.clone()
    }

    /// Current section and total section count, e.g. `(2, 5)`.
    pub fn progress(&self) -> (u8, u8) {
        (self.section().ordinal(), Section::LAST.ordinal())
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("FormController")
            .field("section", &state.section)
            .field("submitting", &state.submitting)
            .field("completed", &state.completed)
            .finish_non_exhaustive()
    }
}
