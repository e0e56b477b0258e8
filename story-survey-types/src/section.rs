use std::fmt;

use crate::TextField;

/// One of the five ordered stages of the survey.
///
/// The survey starts at `Contact` and moves forward one section at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    #[default]
    Contact,
    Journey,
    EmotionalLandscape,
    CopingAndCommunity,
    OpenSharing,
}

impl Section {
    /// All sections in order.
    pub const ALL: [Self; 5] = [
        Self::Contact,
        Self::Journey,
        Self::EmotionalLandscape,
        Self::CopingAndCommunity,
        Self::OpenSharing,
    ];

    pub const FIRST: Self = Self::Contact;
    pub const LAST: Self = Self::OpenSharing;

    /// 1-based position of this section.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Contact => 1,
            Self::Journey => 2,
            Self::EmotionalLandscape => 3,
            Self::CopingAndCommunity => 4,
            Self::OpenSharing => 5,
        }
    }

    /// Look up a section by its 1-based position.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.ordinal() == ordinal)
    }

    /// Heading shown above the section.
    pub fn title(self) -> &'static str {
        match self {
            Self::Contact => "Contact Information",
            Self::Journey => "Your Caregiving Journey",
            Self::EmotionalLandscape => "The Emotional Landscape",
            Self::CopingAndCommunity => "Coping & Community",
            Self::OpenSharing => "Share More",
        }
    }

    /// The following section, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// The preceding section, or `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        self.ordinal().checked_sub(1).and_then(Self::from_ordinal)
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// The free-text fields asked in this section, in display order.
    pub fn text_fields(self) -> impl Iterator<Item = TextField> {
        TextField::ALL
            .into_iter()
            .filter(move |field| field.section() == self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
