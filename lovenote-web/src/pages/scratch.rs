use crate::components::button::Button;
use crate::components::scratch_card::ScratchCard;
use lovenote_card::ScratchCopy;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ScratchPageProps {
    pub copy: ScratchCopy,
    /// The surface never reports completion; the user decides when enough is
    /// revealed and advances through this callback.
    pub on_found: Callback<()>,
}

#[function_component(ScratchPage)]
pub fn scratch_page(props: &ScratchPageProps) -> Html {
    let on_found = {
        let on_found = props.on_found.clone();
        Callback::from(move |_: MouseEvent| on_found.emit(()))
    };

    html! {
        <div class="z-10 flex flex-col items-center" data-testid="scratch-page">
            <h2 class="text-white text-3xl font-bold mb-6 text-center">{ props.copy.heading.clone() }</h2>
            <ScratchCard
                hidden_message={props.copy.hidden_message.clone()}
                hidden_emoji={props.copy.hidden_emoji.clone()}
            />
            <Button
                label={props.copy.cta.clone()}
                onclick={on_found}
                class={classes!("mt-8", "bg-white", "text-rose-600", "px-10", "py-4", "rounded-full", "font-bold", "animate-bounce", "shadow-xl")}
            />
        </div>
    }
}
