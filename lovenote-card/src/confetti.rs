//! Clock-parameterised schedule for the finale confetti sequence.
//!
//! The UI drives a repeating timer; each tick asks the run for the next
//! burst. The run carries no cancellation handle: once started it emits
//! bursts until its wall-clock deadline passes, then reports `None` forever.

use rand::Rng;
use serde::Serialize;

/// Total length of one confetti run, wall clock.
pub const CONFETTI_DURATION_MS: f64 = 15_000.0;
/// Spacing between bursts.
pub const CONFETTI_INTERVAL_MS: u32 = 250;
/// Particles emitted per burst.
pub const BURST_PARTICLE_COUNT: u32 = 40;
/// Spread angle of each burst, in degrees.
pub const BURST_SPREAD: f64 = 100.0;
/// Palette for every burst.
pub const CONFETTI_COLORS: [&str; 3] = ["#ff4d6d", "#ff8fa3", "#ffffff"];

/// Normalized viewport position a burst originates from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BurstOrigin {
    pub x: f64,
    pub y: f64,
}

/// One burst, shaped for the external confetti collaborator
/// (field names follow its camelCase option object).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstOptions {
    pub particle_count: u32,
    pub spread: f64,
    pub origin: BurstOrigin,
    pub colors: Vec<&'static str>,
}

/// A single fire-and-forget confetti run with a hard deadline.
///
/// Runs are independent values: repeated finale confirmations start
/// overlapping runs that each tick on their own timer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiRun {
    ends_at_ms: f64,
}

impl ConfettiRun {
    /// Start a run at the given wall-clock instant (milliseconds).
    #[must_use]
    pub fn start(now_ms: f64) -> Self {
        Self {
            ends_at_ms: now_ms + CONFETTI_DURATION_MS,
        }
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms >= self.ends_at_ms
    }

    /// The burst for one timer tick, or `None` once the deadline has passed.
    ///
    /// Origins are randomized per burst: x uniform in [0, 1), y uniform in
    /// [-0.2, 0.8) so some bursts start just above the viewport.
    pub fn tick<R: Rng + ?Sized>(&self, now_ms: f64, rng: &mut R) -> Option<BurstOptions> {
        if self.is_finished(now_ms) {
            return None;
        }
        Some(BurstOptions {
            particle_count: BURST_PARTICLE_COUNT,
            spread: BURST_SPREAD,
            origin: BurstOrigin {
                x: rng.r#gen::<f64>(),
                y: rng.r#gen::<f64>() - 0.2,
            },
            colors: CONFETTI_COLORS.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn run_emits_until_the_deadline_and_then_stops() {
        let mut rng = SmallRng::seed_from_u64(7);
        let run = ConfettiRun::start(1_000.0);

        let mut emitted = 0_u32;
        let mut now = 1_000.0;
        while let Some(burst) = run.tick(now, &mut rng) {
            assert_eq!(burst.particle_count, BURST_PARTICLE_COUNT);
            assert!((burst.spread - BURST_SPREAD).abs() < f64::EPSILON);
            assert_eq!(burst.colors, CONFETTI_COLORS.to_vec());
            assert!((0.0..1.0).contains(&burst.origin.x));
            assert!((-0.2..0.8).contains(&burst.origin.y));
            emitted += 1;
            now += f64::from(CONFETTI_INTERVAL_MS);
        }
        assert_eq!(emitted, 60); // 15 s of 250 ms ticks
        assert!(run.is_finished(now));
        assert_eq!(run.tick(now + 1.0, &mut rng), None);
    }

    #[test]
    fn overlapping_runs_are_independent() {
        let mut rng = SmallRng::seed_from_u64(11);
        let first = ConfettiRun::start(0.0);
        let second = ConfettiRun::start(10_000.0);

        // After the first deadline only the second run still emits.
        let now = 16_000.0;
        assert_eq!(first.tick(now, &mut rng), None);
        assert!(second.tick(now, &mut rng).is_some());
    }

    #[test]
    fn burst_options_serialize_for_the_collaborator() {
        let mut rng = SmallRng::seed_from_u64(3);
        let burst = ConfettiRun::start(0.0)
            .tick(0.0, &mut rng)
            .expect("run just started");
        let json = serde_json::to_value(&burst).expect("serializable");
        assert_eq!(json["particleCount"], 40);
        assert_eq!(json["spread"], 100.0);
        assert!(json["origin"]["x"].is_f64());
        assert_eq!(json["colors"][0], "#ff4d6d");
    }
}
