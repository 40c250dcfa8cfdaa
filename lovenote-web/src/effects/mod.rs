//! Drivers for the card's fire-and-forget collaborators: background audio
//! and the finale confetti sequence. Nothing here returns a value the rest
//! of the app depends on.

pub mod audio;
pub mod confetti;
