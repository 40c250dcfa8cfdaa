use crate::components::button::Button;
use lovenote_card::IntroCopy;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct IntroPageProps {
    pub copy: IntroCopy,
    pub on_open: Callback<()>,
}

#[function_component(IntroPage)]
pub fn intro_page(props: &IntroPageProps) -> Html {
    let on_open = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <div class="z-10 bg-white/10 backdrop-blur-md p-10 rounded-3xl text-center text-white border border-white/20 shadow-2xl" data-testid="intro-page">
            <h1 class="text-5xl font-bold mb-6">{ props.copy.title.clone() }</h1>
            <p class="text-xl mb-8">{ props.copy.subtitle.clone() }</p>
            <Button
                label={props.copy.cta.clone()}
                onclick={on_open}
                class={classes!("bg-rose-500", "hover:bg-rose-600", "px-10", "py-4", "rounded-full", "font-bold", "text-xl", "shadow-lg")}
            />
        </div>
    }
}
