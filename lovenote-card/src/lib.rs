//! Lovenote Card Engine
//!
//! Platform-agnostic core logic for the Lovenote interactive greeting card.
//! This crate models the page progression, the scratch-off overlay raster,
//! and the finale confetti schedule without any UI or platform dependencies.

#![forbid(unsafe_code)]

pub mod confetti;
pub mod controller;
pub mod copy;
pub mod scratch;

// Re-export commonly used types
pub use confetti::{
    BurstOptions, BurstOrigin, ConfettiRun, CONFETTI_COLORS, CONFETTI_DURATION_MS,
    CONFETTI_INTERVAL_MS,
};
pub use controller::{PageController, Step, StepChange};
pub use copy::{CardCopy, FinaleCopy, IntroCopy, MessageCopy, ScratchCopy, StatsCopy};
pub use scratch::{
    BoundingBox, ScratchSurface, SurfaceError, ERASE_RADIUS, SURFACE_HEIGHT, SURFACE_WIDTH,
};
