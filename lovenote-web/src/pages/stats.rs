use crate::components::button::Button;
use lovenote_card::StatsCopy;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StatsPageProps {
    pub copy: StatsCopy,
    pub on_next: Callback<()>,
}

#[function_component(StatsPage)]
pub fn stats_page(props: &StatsPageProps) -> Html {
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="z-10 bg-black/20 backdrop-blur-lg border border-white/30 p-8 rounded-3xl text-center max-w-md text-white" data-testid="stats-page">
            <h2 class="text-2xl font-bold mb-6">{ props.copy.heading.clone() }</h2>
            <div class="space-y-4 text-lg">
                { for props.copy.lines.iter().map(|line| html! {
                    <p class="bg-white/10 p-4 rounded-xl">{ line.clone() }</p>
                }) }
            </div>
            <Button
                label={props.copy.cta.clone()}
                onclick={on_next}
                class={classes!("mt-8", "bg-rose-500", "px-8", "py-3", "rounded-full", "font-bold")}
            />
        </div>
    }
}
