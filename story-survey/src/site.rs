use std::sync::Arc;

use story_survey_types::PersistenceSink;

use crate::controller::FormController;
use crate::effects::EffectDispatcher;

/// Where respondents can book a conversation after sharing their story.
pub const SCHEDULING_URL: &str = "https://calendly.com/sia-sanjeevaniai/30min";

/// Which screen the site is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The story and the call-to-action.
    Story,
    /// The survey, on whatever section the respondent has reached.
    Survey,
    /// The thank-you screen after a stored response.
    ThankYou,
}

/// The landing page wrapped around the survey.
///
/// Opening the survey always starts a fresh session; going back to the story
/// discards whatever was in progress.
pub struct StorySite {
    store: Arc<dyn PersistenceSink>,
    effects: EffectDispatcher,
    scheduling_url: String,
    survey: Option<FormController>,
}

impl StorySite {
    pub fn new(store: Arc<dyn PersistenceSink>, effects: EffectDispatcher) -> Self {
        Self {
            store,
            effects,
            scheduling_url: SCHEDULING_URL.to_string(),
            survey: None,
        }
    }

    /// Use a different scheduling link on the thank-you screen.
    pub fn with_scheduling_url(mut self, url: impl Into<String>) -> Self {
        self.scheduling_url = url.into();
        self
    }

    pub fn page(&self) -> Page {
        match &self.survey {
            None => Page::Story,
            Some(survey) if survey.is_completed() => Page::ThankYou,
            Some(_) => Page::Survey,
        }
    }

    /// The call-to-action: records the click and opens a fresh survey.
    pub fn start_survey(&mut self) -> &FormController {
        self.effects.survey_started();
        tracing::debug!("opening survey");
        self.survey
            .insert(FormController::new(self.store.clone(), self.effects.clone()))
    }

    /// The survey in progress, if one is open.
    pub fn survey(&self) -> Option<&FormController> {
        self.survey.as_ref()
    }

    /// Return to the story, discarding the survey.
    ///
    /// Refused while a submission is in flight. Returns whether the site is
    /// now on the story page.
    pub fn back_to_story(&mut self) -> bool {
        if self.survey.as_ref().is_some_and(FormController::is_submitting) {
            return false;
        }
        self.survey = None;
        true
    }

    /// Records the click on the scheduling link and returns the link.
    pub fn schedule_conversation(&self) -> &str {
        self.effects.calendar_opened();
        &self.scheduling_url
    }
}

impl std::fmt::Debug for StorySite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorySite")
            .field("page", &self.page())
            .field("scheduling_url", &self.scheduling_url)
            .finish_non_exhaustive()
    }
}
