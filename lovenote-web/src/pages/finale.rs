use crate::components::button::Button;
use lovenote_card::FinaleCopy;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FinalePageProps {
    pub copy: FinaleCopy,
    /// Every choice is a duplicate affirmative; they all confirm.
    pub on_choose: Callback<()>,
}

#[function_component(FinalePage)]
pub fn finale_page(props: &FinalePageProps) -> Html {
    html! {
        <div class="z-10 bg-white/20 backdrop-blur-3xl p-8 rounded-3xl text-center text-white border border-white/40 shadow-2xl max-w-sm w-full" data-testid="finale-page">
            <h1 class="text-3xl font-black mb-8">{ props.copy.question.clone() }</h1>
            <div class="flex flex-col gap-4">
                { for props.copy.choices.iter().map(|choice| {
                    let on_choose = props.on_choose.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_choose.emit(()));
                    html! {
                        <Button
                            label={choice.clone()}
                            {onclick}
                            class={classes!("bg-rose-500", "hover:bg-rose-600", "py-4", "rounded-2xl", "font-bold", "text-xl")}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
