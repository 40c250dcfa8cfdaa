use lovenote_card::{CardCopy, PageController};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub controller: UseStateHandle<PageController>,
    pub copy: UseStateHandle<CardCopy>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        controller: use_state(PageController::new),
        copy: use_state(load_card_copy),
    }
}

/// Card copy embedded at compile time; malformed edits fall back to the
/// built-in text so the card always renders.
#[must_use]
pub fn load_card_copy() -> CardCopy {
    CardCopy::from_json(include_str!("../../static/assets/data/card.json")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::load_card_copy;

    #[test]
    fn embedded_copy_parses_and_is_complete() {
        let copy = load_card_copy();
        assert!(!copy.intro.title.is_empty());
        assert_eq!(copy.stats.lines.len(), 3);
        assert_eq!(copy.finale.choices.len(), 3);
        assert!(!copy.scratch.hidden_message.is_empty());
    }
}
