//! Dialoguer prompts driving a `StorySite`.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Input, MultiSelect, Select};
use story_survey::{
    AGE_HINT, CaregivingDuration, DifficultyRating, FieldUpdate, FormController, Notice, Page,
    Relationship, Section, StorySite, SubmitOutcome, SupportSystem, TextField,
};
use thiserror::Error;

use crate::questions::{self, question};

/// Error type for the terminal front end.
#[derive(Debug, Error)]
pub enum WizardError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompted<T>(result: Result<T, dialoguer::Error>) -> Result<T, WizardError> {
    result.map_err(|err| {
        if is_cancelled(&err) {
            WizardError::Cancelled
        } else {
            WizardError::Dialoguer(err)
        }
    })
}

/// Everything the respondent can pick from a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ShareStory,
    Schedule,
    Continue,
    Submit,
    Edit,
    Previous,
    BackToStory,
    Quit,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Self::ShareStory => "Share Your Story",
            Self::Schedule => "Schedule a Conversation",
            Self::Continue => "Continue",
            Self::Submit => "Submit My Story",
            Self::Edit => "Edit my answers",
            Self::Previous => "Previous",
            Self::BackToStory => "Back to Story",
            Self::Quit => "Quit",
        }
    }
}

/// Menu shown under a section. Continue only appears once the section is
/// complete; the last section submits instead.
fn step_actions(section: Section, complete: bool) -> Vec<Action> {
    let mut actions = Vec::new();
    if section.is_last() {
        actions.push(Action::Submit);
    } else if complete {
        actions.push(Action::Continue);
    }
    actions.push(Action::Edit);
    if section != Section::FIRST {
        actions.push(Action::Previous);
    }
    actions.push(Action::BackToStory);
    actions
}

/// Parse the optional age answer. Empty means not provided.
fn parse_age(input: &str) -> Result<Option<u8>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| "Please enter your age as a whole number".to_string())
}

/// Interactive terminal wizard.
///
/// Presents the story, then one survey section at a time. Each answer is
/// written into the site's `FormController` as soon as it is given; the
/// controller decides whether the respondent may move on.
#[derive(Debug, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl Default for DialoguerWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerWizard {
    /// Create a wizard with the colorful theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with plain (no color) prompts.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Run until the respondent quits.
    pub async fn run(&self, site: &mut StorySite) -> Result<(), WizardError> {
        let mut story_shown = false;
        loop {
            match site.page() {
                Page::Story => {
                    if !story_shown {
                        show_story();
                        story_shown = true;
                    }
                    match self.choose(
                        questions::CALL_TO_ACTION,
                        &[Action::ShareStory, Action::Schedule, Action::Quit],
                    )? {
                        Action::ShareStory => {
                            site.start_survey();
                        }
                        Action::Schedule => show_scheduling(site),
                        _ => return Ok(()),
                    }
                }
                Page::Survey => {
                    let Some(survey) = site.survey() else {
                        continue;
                    };
                    if self.section_step(survey).await? == Action::BackToStory {
                        site.back_to_story();
                    }
                }
                Page::ThankYou => {
                    show_thank_you();
                    match self.choose(
                        "What next?",
                        &[Action::Schedule, Action::BackToStory, Action::Quit],
                    )? {
                        Action::Schedule => show_scheduling(site),
                        Action::BackToStory => {
                            site.back_to_story();
                        }
                        _ => return Ok(()),
                    }
                }
            }
        }
    }

    /// Ask the current section's questions, then offer the navigation menu.
    ///
    /// Returns the action taken so the caller can leave the survey.
    async fn section_step(&self, survey: &FormController) -> Result<Action, WizardError> {
        let section = survey.section();
        let (step, total) = survey.progress();
        println!();
        println!("Step {step} of {total}: {}", section.title());
        println!();

        self.ask_section(survey, section)?;

        loop {
            let missing = survey.missing_fields();
            if !missing.is_empty() {
                println!("Before you continue, please add:");
                for requirement in &missing {
                    println!("  - {requirement}");
                }
            }

            let action = self.choose("", &step_actions(section, missing.is_empty()))?;
            match action {
                Action::Continue => {
                    survey.advance();
                }
                Action::Previous => {
                    survey.retreat();
                }
                Action::Submit => match survey.submit().await {
                    Ok(SubmitOutcome::Incomplete(unfinished)) => {
                        println!("\"{}\" still needs a few answers.", unfinished.title());
                        while survey.section() != unfinished && survey.retreat() {}
                    }
                    Ok(_) => show_notice(survey.notice()),
                    Err(err) => {
                        tracing::debug!(error = %err, "submission failed, offering retry");
                        show_notice(survey.notice());
                        continue;
                    }
                },
                Action::Edit | Action::BackToStory => {}
                Action::ShareStory | Action::Schedule | Action::Quit => continue,
            }
            return Ok(action);
        }
    }

    fn ask_section(&self, survey: &FormController, section: Section) -> Result<(), WizardError> {
        match section {
            Section::Contact => {
                self.ask_text(survey, TextField::Name)?;
                self.ask_text(survey, TextField::Email)?;
                self.ask_age(survey)
            }
            Section::Journey => {
                self.ask_relationship(survey)?;
                self.ask_duration(survey)?;
                self.ask_text(survey, TextField::TypicalDay)?;
                self.ask_rating(survey)?;
                self.ask_text(survey, TextField::DifficultyReason)
            }
            Section::EmotionalLandscape | Section::OpenSharing => {
                for field in section.text_fields() {
                    self.ask_text(survey, field)?;
                }
                Ok(())
            }
            Section::CopingAndCommunity => {
                self.ask_text(survey, TextField::CopingMethods)?;
                self.ask_text(survey, TextField::TalkToWhom)?;
                self.ask_support_systems(survey)?;
                self.ask_text(survey, TextField::MissingSupport)?;
                self.ask_text(survey, TextField::ExtraHour)?;
                self.ask_text(survey, TextField::LostActivity)
            }
        }
    }

    fn ask_text(&self, survey: &FormController, field: TextField) -> Result<(), WizardError> {
        let current = survey.draft().text(field).to_string();
        let theme = self.theme();
        let value: String = prompted(
            Input::<String>::with_theme(theme.as_ref())
                .with_prompt(question(field))
                .with_initial_text(current)
                .allow_empty(true)
                .interact_text(),
        )?;
        survey.set_text(field, value);
        Ok(())
    }

    fn ask_age(&self, survey: &FormController) -> Result<(), WizardError> {
        let current = survey
            .draft()
            .age()
            .map(|age| age.to_string())
            .unwrap_or_default();
        let prompt = format!(
            "{} ({}-{})",
            questions::AGE,
            AGE_HINT.start(),
            AGE_HINT.end()
        );
        let theme = self.theme();
        let raw: String = prompted(
            Input::<String>::with_theme(theme.as_ref())
                .with_prompt(prompt)
                .with_initial_text(current)
                .allow_empty(true)
                .validate_with(|input: &String| parse_age(input).map(|_| ()))
                .interact_text(),
        )?;
        if let Ok(age) = parse_age(&raw) {
            survey.set_field(FieldUpdate::Age(age));
        }
        Ok(())
    }

    fn ask_relationship(&self, survey: &FormController) -> Result<(), WizardError> {
        let labels: Vec<&str> = Relationship::ALL.iter().map(|r| r.label()).collect();
        let current = survey
            .draft()
            .relationship()
            .and_then(|r| Relationship::ALL.iter().position(|option| *option == r));
        let index = self.select(questions::RELATIONSHIP, &labels, current)?;

        let relationship = Relationship::ALL[index];
        survey.set_field(FieldUpdate::Relationship(Some(relationship)));
        if relationship.is_other() {
            self.ask_text(survey, TextField::RelationshipOther)?;
        }
        Ok(())
    }

    fn ask_duration(&self, survey: &FormController) -> Result<(), WizardError> {
        let labels: Vec<&str> = CaregivingDuration::ALL.iter().map(|d| d.label()).collect();
        let current = survey
            .draft()
            .duration()
            .and_then(|d| CaregivingDuration::ALL.iter().position(|option| *option == d));
        let index = self.select(questions::DURATION, &labels, current)?;
        survey.set_field(FieldUpdate::Duration(Some(CaregivingDuration::ALL[index])));
        Ok(())
    }

    fn ask_rating(&self, survey: &FormController) -> Result<(), WizardError> {
        let ratings: Vec<DifficultyRating> = DifficultyRating::scale().collect();
        let labels: Vec<String> = ratings.iter().map(|r| r.get().to_string()).collect();
        let current = survey.draft().difficulty_rating();
        let default = ratings.iter().position(|r| *r == current);
        let index = self.select(questions::DIFFICULTY_RATING, &labels, default)?;
        survey.set_field(FieldUpdate::DifficultyRating(ratings[index]));
        Ok(())
    }

    fn ask_support_systems(&self, survey: &FormController) -> Result<(), WizardError> {
        let draft = survey.draft();
        let labels: Vec<&str> = SupportSystem::ALL.iter().map(|s| s.label()).collect();
        let defaults: Vec<bool> = SupportSystem::ALL
            .iter()
            .map(|s| draft.support_systems().contains(*s))
            .collect();

        let theme = self.theme();
        let chosen = prompted(
            MultiSelect::with_theme(theme.as_ref())
                .with_prompt(questions::SUPPORT_SYSTEMS)
                .items(&labels)
                .defaults(&defaults)
                .interact(),
        )?;

        for (index, system) in SupportSystem::ALL.into_iter().enumerate() {
            survey.set_support_system(system, chosen.contains(&index));
        }
        if survey.draft().support_systems().includes_other() {
            self.ask_text(survey, TextField::SupportSystemsOther)?;
        }
        Ok(())
    }

    fn select<T: ToString>(
        &self,
        prompt: &str,
        items: &[T],
        default: Option<usize>,
    ) -> Result<usize, WizardError> {
        let theme = self.theme();
        let mut select = Select::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(items);
        if let Some(index) = default {
            select = select.default(index);
        }
        prompted(select.interact())
    }

    fn choose(&self, prompt: &str, actions: &[Action]) -> Result<Action, WizardError> {
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let index = self.select(prompt, &labels, Some(0))?;
        Ok(actions[index])
    }
}

fn show_story() {
    println!();
    println!("{}", questions::HEADLINE);
    println!();
    for paragraph in questions::STORY {
        println!("{paragraph}");
        println!();
    }
    println!("{}", questions::PRIVACY_PLEDGE);
    println!();
}

fn show_scheduling(site: &StorySite) {
    println!();
    println!("{}", questions::SCHEDULE_INVITATION);
    println!("Book a time: {}", site.schedule_conversation());
    println!();
}

fn show_thank_you() {
    println!();
    println!("{}", questions::THANK_YOU_TITLE);
    println!("{}", questions::THANK_YOU);
    println!();
}

fn show_notice(notice: Option<Notice>) {
    if let Some(notice) = notice {
        println!();
        println!("{}", notice.title);
        println!("{}", notice.description);
    }
}
