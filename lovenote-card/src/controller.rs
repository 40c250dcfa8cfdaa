//! Page progression for the card: a fixed forward-only sequence of steps
//! ending in a terminal choice page that loops on itself.

use serde::{Deserialize, Serialize};

/// One stage in the fixed linear page sequence.
///
/// Exactly one step is current at any time. Transitions are strictly forward;
/// `FinalChoice` is terminal and never advances further.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    #[default]
    Intro,
    Stats,
    Message,
    ScratchReveal,
    FinalChoice,
}

impl Step {
    /// All steps in presentation order.
    pub const ORDER: [Self; 5] = [
        Self::Intro,
        Self::Stats,
        Self::Message,
        Self::ScratchReveal,
        Self::FinalChoice,
    ];

    /// The step that follows this one, or `None` at the terminal step.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Intro => Some(Self::Stats),
            Self::Stats => Some(Self::Message),
            Self::Message => Some(Self::ScratchReveal),
            Self::ScratchReveal => Some(Self::FinalChoice),
            Self::FinalChoice => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::FinalChoice)
    }
}

/// A completed forward transition reported by [`PageController::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepChange {
    pub from: Step,
    pub to: Step,
}

impl StepChange {
    /// Background audio is cued once, on the transition away from the intro
    /// page. Playback itself is a best-effort collaborator call; the caller
    /// swallows any failure.
    #[must_use]
    pub const fn starts_audio(self) -> bool {
        matches!(self.from, Step::Intro)
    }
}

/// Owns the current step and the finale confirmation flag.
///
/// All operations are safe to call in any state; invalid calls are no-ops
/// rather than errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageController {
    step: Step,
    finale_shown: bool,
}

impl PageController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: Step::Intro,
            finale_shown: false,
        }
    }

    #[must_use]
    pub const fn current_step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub const fn finale_shown(&self) -> bool {
        self.finale_shown
    }

    /// Move to the next step in the fixed order.
    ///
    /// Returns the transition that took place, or `None` when already at the
    /// terminal step (a safe no-op, not an error).
    pub fn advance(&mut self) -> Option<StepChange> {
        let from = self.step;
        let to = from.next()?;
        self.step = to;
        Some(StepChange { from, to })
    }

    /// Confirm the finale. Meaningful only at the terminal step.
    ///
    /// Returns `true` when the confirmation registered, which is the caller's
    /// cue to start a confetti run. Repeated calls each return `true` at the
    /// terminal step; overlapping confetti runs are accepted cosmetic
    /// layering, not something to serialize.
    pub fn choose_final(&mut self) -> bool {
        if !self.step.is_terminal() {
            return false;
        }
        self.finale_shown = true;
        true
    }

    /// Hide the finale confirmation again. The current step is unchanged.
    pub fn dismiss_finale(&mut self) {
        self.finale_shown = false;
    }
}
