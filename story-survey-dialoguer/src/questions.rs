//! What the respondent reads: the story and the question for each field.

use story_survey::TextField;

pub const HEADLINE: &str = "Drop your story. Build the glory.";

/// The story shown before the call-to-action, one paragraph per entry.
pub const STORY: &[&str] = &[
    "Once upon a time... it all began with a BIG dream. The American Dream. I came to the U.S. \
     from India, chasing a Ph.D. and a beautiful life. But on October 4th, 2022, a cancer \
     diagnosis changed everything.",
    "My husband became my caregiver, my unwavering support system, while we were far from home \
     with no family or friends nearby. He had to manage our children, our home, his job, and all \
     my doctor's appointments back to back. While he was taking care of my body and all these \
     tasks, the person he was was slowly disappearing.",
    "Then one night, I found him in the dark, sitting alone, overwhelmed and broken from the \
     stress. He looked at me and said, \"Just hang in there. Don't give up.\"",
    "While everyone was focused on the survivor, no one was asking who was taking care of the \
     caregiver.",
    "My mission is to build a community. A place where our stories are heard, and our \
     experiences are shared. I am listening to understand the true needs of caregivers so we \
     can build a space where we all feel seen again.",
];

pub const CALL_TO_ACTION: &str = "Share your story with me. Your voice will be our direction.";

pub const PRIVACY_PLEDGE: &str = "We will never sell your data. Your story is sacred.";

pub const THANK_YOU_TITLE: &str = "Thank You For Sharing Your Heart";

pub const THANK_YOU: &str = "Together, we honor the bond between you and your loved one. \
     Thank you for trusting us with your story.";

pub const SCHEDULE_INVITATION: &str = "If you're open, I'd love to hear your story directly. \
     Sometimes a conversation can say what words alone cannot.";

pub const AGE: &str = "Age (optional)";

pub const RELATIONSHIP: &str = "What is your relationship to the person you are caring for?";

pub const DURATION: &str = "How long have you been a caregiver?";

pub const DIFFICULTY_RATING: &str = "On a scale of 1 to 10 (with 10 being the most difficult), \
     how would you rate the overall challenge of your caregiving experience?";

pub const SUPPORT_SYSTEMS: &str = "What kinds of support systems have you used? (Select all that apply)";

/// The question asked for a free-text field.
pub fn question(field: TextField) -> &'static str {
    match field {
        TextField::Name => "Your name",
        TextField::Email => "Email address",
        TextField::RelationshipOther => "Please specify your relationship",
        TextField::TypicalDay => {
            "Could you walk us through a typical day? What tasks or responsibilities take the \
             most of your time and emotional energy?"
        }
        TextField::DifficultyReason => "Why did you choose that number?",
        TextField::EmotionalChallenge => {
            "What is the most difficult emotional challenge you face as a caregiver?"
        }
        TextField::IsolationFeeling => {
            "Do you ever feel a sense of isolation or loneliness in your role? If so, what does \
             that feel like?"
        }
        TextField::RelationshipLearning => {
            "What's one thing you've learned about your relationship with your loved one that \
             you never would have known without this experience?"
        }
        TextField::ConnectionMoment => {
            "Tell me about a time when you and your loved one were able to connect in a simple, \
             meaningful way. What did you do, and what did that moment feel like?"
        }
        TextField::LoveMemory => {
            "When you feel overwhelmed, what's a small memory or thought that you hold on to \
             that reminds you of the love between you and your loved one?"
        }
        TextField::CopingMethods => {
            "What are some of the ways you have found to cope with the emotional and mental \
             challenges of caregiving?"
        }
        TextField::TalkToWhom => {
            "When you need to talk to someone who truly understands, who or where do you turn to?"
        }
        TextField::SupportSystemsOther => "Please specify other support systems",
        TextField::MissingSupport => {
            "What do you think is the biggest thing missing for caregivers, in terms of support? \
             What would make you feel most understood and less alone?"
        }
        TextField::ExtraHour => "If you had an extra hour in your day, what would you spend it on?",
        TextField::LostActivity => {
            "What is one thing you used to love doing before caregiving that you no longer have \
             time for?"
        }
        TextField::AdditionalSharing => "Is there anything else you would like to share? (optional)",
    }
}
