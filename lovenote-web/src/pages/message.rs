use crate::components::button::Button;
use lovenote_card::MessageCopy;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessagePageProps {
    pub copy: MessageCopy,
    pub on_next: Callback<()>,
}

#[function_component(MessagePage)]
pub fn message_page(props: &MessagePageProps) -> Html {
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="z-10 bg-white/10 backdrop-blur-xl border border-white/20 p-8 rounded-3xl text-center max-w-md text-white" data-testid="message-page">
            <h3 class="text-2xl font-bold mb-4 text-rose-300">{ props.copy.heading.clone() }</h3>
            <p class="italic leading-relaxed text-gray-100 mb-6 text-sm md:text-base">
                { props.copy.body.clone() }
            </p>
            <Button
                label={props.copy.cta.clone()}
                onclick={on_next}
                class={classes!("bg-rose-500", "px-10", "py-3", "rounded-full", "font-bold")}
            />
        </div>
    }
}
