use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAudioElement;

/// DOM id of the looping background track rendered by the app shell.
pub const AUDIO_ELEMENT_ID: &str = "bg-music";

/// Start the background track, best-effort.
///
/// Autoplay can be blocked by platform policy; the rejected play promise is
/// swallowed so the card carries on silently.
pub fn start_background_audio() {
    let Some(element) = crate::dom::document().get_element_by_id(AUDIO_ELEMENT_ID) else {
        return;
    };
    let Ok(audio) = element.dyn_into::<HtmlAudioElement>() else {
        return;
    };
    if let Ok(promise) = audio.play() {
        let swallow = Closure::once(|_err: JsValue| {});
        let _ = promise.catch(&swallow);
        swallow.forget();
    }
}
