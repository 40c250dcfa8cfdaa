pub mod state;

use crate::components::finale_modal::FinaleModal;
use crate::components::floating_hearts::FloatingHearts;
use crate::effects;
use crate::pages::finale::FinalePage;
use crate::pages::intro::IntroPage;
use crate::pages::message::MessagePage;
use crate::pages::scratch::ScratchPage;
use crate::pages::stats::StatsPage;
use lovenote_card::Step;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    let controller = app_state.controller.clone();

    let on_advance = {
        let controller = controller.clone();
        Callback::from(move |()| {
            let mut next = *controller;
            if let Some(change) = next.advance() {
                log::debug!("page advance: {:?} -> {:?}", change.from, change.to);
                if change.starts_audio() {
                    effects::audio::start_background_audio();
                }
                controller.set(next);
            }
        })
    };

    let on_choose_final = {
        let controller = controller.clone();
        Callback::from(move |()| {
            let mut next = *controller;
            if next.choose_final() {
                effects::confetti::launch_finale_confetti();
                controller.set(next);
            }
        })
    };

    let on_dismiss_finale = {
        let controller = controller.clone();
        Callback::from(move |()| {
            let mut next = *controller;
            next.dismiss_finale();
            controller.set(next);
        })
    };

    let copy = (*app_state.copy).clone();
    let page = match controller.current_step() {
        Step::Intro => html! { <IntroPage copy={copy.intro.clone()} on_open={on_advance.clone()} /> },
        Step::Stats => html! { <StatsPage copy={copy.stats.clone()} on_next={on_advance.clone()} /> },
        Step::Message => html! { <MessagePage copy={copy.message.clone()} on_next={on_advance.clone()} /> },
        Step::ScratchReveal => {
            html! { <ScratchPage copy={copy.scratch.clone()} on_found={on_advance.clone()} /> }
        }
        Step::FinalChoice => {
            html! { <FinalePage copy={copy.finale.clone()} on_choose={on_choose_final} /> }
        }
    };

    html! {
        <div class="min-h-screen flex items-center justify-center p-4 relative overflow-hidden font-sans app-shell">
            <audio
                id={effects::audio::AUDIO_ELEMENT_ID}
                src={crate::paths::asset_path("static/assets/audio/music.mp3")}
                loop=true
            />
            <FloatingHearts />
            { page }
            <FinaleModal
                open={controller.finale_shown()}
                copy={copy.finale}
                photo_src={crate::paths::asset_path("static/assets/img/us.jpg")}
                on_close={on_dismiss_finale}
            />
        </div>
    }
}
