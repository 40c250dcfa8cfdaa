use std::cell::Cell;
use std::rc::Rc;

use lovenote_card::confetti::{CONFETTI_INTERVAL_MS, ConfettiRun};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Global `confetti` function provided by the canvas-confetti script
    /// loaded in the page shell.
    #[wasm_bindgen(js_name = confetti)]
    fn confetti_burst(options: &JsValue);
}

/// Launch one finale confetti run on a repeating timer.
///
/// The interval drives [`ConfettiRun::tick`] every 250 ms and clears itself
/// once the run's 15-second deadline passes. No cancellation handle is
/// handed out; repeated confirmations layer independent runs.
pub fn launch_finale_confetti() {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    let run = ConfettiRun::start(js_sys::Date::now());

    let interval_id = Rc::new(Cell::new(None::<i32>));
    let id_slot = interval_id.clone();
    let closure = Closure::wrap(Box::new(move || {
        match run.tick(js_sys::Date::now(), &mut rng) {
            Some(burst) => {
                if let Ok(options) = serde_wasm_bindgen::to_value(&burst) {
                    confetti_burst(&options);
                }
            }
            None => {
                if let (Some(id), Some(window)) = (id_slot.get(), web_sys::window()) {
                    window.clear_interval_with_handle(id);
                }
            }
        }
    }) as Box<dyn FnMut()>);

    let Ok(timeout) = i32::try_from(CONFETTI_INTERVAL_MS) else {
        return;
    };
    if let Ok(id) = crate::dom::window().set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout,
    ) {
        interval_id.set(Some(id));
        // The browser interval owns the callback for the rest of the run.
        closure.forget();
    }
}
