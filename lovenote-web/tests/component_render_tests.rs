use futures::executor::block_on;
use lovenote_card::FinaleCopy;
use lovenote_web::app::App;
use lovenote_web::components::finale_modal::FinaleModal;
use lovenote_web::components::scratch_card::ScratchCard;
use yew::{AttrValue, Callback, LocalServerRenderer};

#[test]
fn app_shell_renders_hearts_audio_and_intro() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("animate-float"));
    assert!(html.contains("bg-music"));
    assert!(html.contains("intro-page"));
    assert!(!html.contains("stats-page"));
}

#[test]
fn finale_modal_mirrors_the_open_flag() {
    let open = lovenote_web::components::finale_modal::Props {
        open: true,
        copy: FinaleCopy::default(),
        photo_src: AttrValue::from("/static/assets/img/us.jpg"),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FinaleModal>::with_props(open).render());
    assert!(html.contains("My Everything"));
    assert!(html.contains("Our Memory"));

    let closed = lovenote_web::components::finale_modal::Props {
        open: false,
        copy: FinaleCopy::default(),
        photo_src: AttrValue::from("/static/assets/img/us.jpg"),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FinaleModal>::with_props(closed).render());
    assert!(!html.contains("My Everything"));
}

#[test]
fn scratch_card_keeps_reveal_content_under_a_full_size_canvas() {
    let props = lovenote_web::components::scratch_card::Props {
        hidden_message: AttrValue::from("an important question waits"),
        hidden_emoji: AttrValue::from("\u{1f496}"),
    };
    let html = block_on(LocalServerRenderer::<ScratchCard>::with_props(props).render());
    assert!(html.contains("an important question waits"));
    assert!(html.contains("width=\"350\""));
    assert!(html.contains("height=\"450\""));
}
