pub mod button;
pub mod finale_modal;
pub mod floating_hearts;
pub mod scratch_card;
