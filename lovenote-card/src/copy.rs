//! All user-visible text of the card, modeled as data.
//!
//! The web crate embeds a JSON document and parses it at startup; malformed
//! data falls back to the built-in copy so the card always renders.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroCopy {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsCopy {
    pub heading: String,
    pub lines: Vec<String>,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageCopy {
    pub heading: String,
    pub body: String,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScratchCopy {
    pub heading: String,
    pub hidden_message: String,
    pub hidden_emoji: String,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinaleCopy {
    pub question: String,
    /// Duplicate affirmatives styled as distinct options; every one confirms.
    pub choices: Vec<String>,
    pub modal_caption: String,
    pub modal_subcaption: String,
    pub photo_alt: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardCopy {
    pub intro: IntroCopy,
    pub stats: StatsCopy,
    pub message: MessageCopy,
    pub scratch: ScratchCopy,
    pub finale: FinaleCopy,
}

impl CardCopy {
    /// Parse card copy from JSON.
    ///
    /// # Errors
    /// Returns the underlying parse error; callers fall back to
    /// [`CardCopy::default`].
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl Default for IntroCopy {
    fn default() -> Self {
        Self {
            title: String::from("Hi Love,"),
            subtitle: String::from("This message is for you\u{1f618}\u{1f618}"),
            cta: String::from("Open Letter \u{1f48c}"),
        }
    }
}

impl Default for StatsCopy {
    fn default() -> Self {
        Self {
            heading: String::from("Do you know how many days we've spent together?"),
            lines: vec![
                String::from("We have spent 254 days together."),
                String::from("That's roughly 6,096 hours."),
                String::from("Or around 2,56,03,200 heartbeats."),
            ],
            cta: String::from("Next \u{2764}\u{fe0f}"),
        }
    }
}

impl Default for MessageCopy {
    fn default() -> Self {
        Self {
            heading: String::from("A special message for you\u{2764}\u{fe0f}"),
            body: String::from(
                "\"My Love, Every day with you feels like a gift. You've shown me the true \
                 meaning of love... This Valentine's Day, I want to remind you that you are \
                 my heart and my everything.\" \u{1f9ff}\u{1f9ff}\u{1f9ff}",
            ),
            cta: String::from("Next \u{1f339}"),
        }
    }
}

impl Default for ScratchCopy {
    fn default() -> Self {
        Self {
            heading: String::from("Scratch for a surprise... \u{1f575}\u{fe0f}\u{200d}\u{2640}\u{fe0f}"),
            hidden_message: String::from(
                "\"I have a very important question for you on the next page...\"",
            ),
            hidden_emoji: String::from("\u{1f9ff}\u{1f496}\u{2728}"),
            cta: String::from("I found it! Click me \u{1f48c}"),
        }
    }
}

impl Default for FinaleCopy {
    fn default() -> Self {
        Self {
            question: String::from("Will you be my valentine baby? \u{1f97a}"),
            choices: vec![
                String::from("Yes!"),
                String::from("Your option is only me"),
                String::from("Obviously yes"),
            ],
            modal_caption: String::from("My Everything \u{2764}\u{fe0f}"),
            modal_subcaption: String::from("Valentine's Day 2026"),
            photo_alt: String::from("Our Memory"),
        }
    }
}
