use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

const HEART_COUNT: usize = 20;

#[derive(Clone, PartialEq)]
struct Heart {
    left_pct: f64,
    delay_s: f64,
    size_px: f64,
}

fn generate_hearts(seed: u64) -> Vec<Heart> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..HEART_COUNT)
        .map(|_| Heart {
            left_pct: rng.r#gen::<f64>() * 100.0,
            delay_s: rng.r#gen::<f64>() * 5.0,
            size_px: rng.r#gen::<f64>() * 20.0 + 15.0,
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn heart_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x1f496
    }
}

/// Decorative drifting hearts behind every page. Purely cosmetic: positions,
/// delays, and sizes are randomized once per mount.
#[function_component(FloatingHearts)]
pub fn floating_hearts() -> Html {
    let hearts = use_state(|| generate_hearts(heart_seed()));

    html! {
        <div class="fixed inset-0 pointer-events-none overflow-hidden z-0" aria-hidden="true">
            { for hearts.iter().map(|heart| {
                let style = format!(
                    "left: {:.2}%; animation-delay: {:.2}s; font-size: {:.0}px; bottom: -10%;",
                    heart.left_pct, heart.delay_s, heart.size_px
                );
                html! {
                    <div class="absolute text-rose-400/40 animate-float" {style}>
                        { "\u{2764}\u{fe0f}" }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn generates_the_full_heart_field_in_range() {
        let hearts = generate_hearts(9);
        assert_eq!(hearts.len(), HEART_COUNT);
        for heart in &hearts {
            assert!((0.0..100.0).contains(&heart.left_pct));
            assert!((0.0..5.0).contains(&heart.delay_s));
            assert!((15.0..35.0).contains(&heart.size_px));
        }
    }

    #[test]
    fn renders_one_element_per_heart() {
        let html = block_on(LocalServerRenderer::<FloatingHearts>::new().render());
        assert_eq!(html.matches("animate-float").count(), HEART_COUNT);
    }
}
