use lovenote_card::FinaleCopy;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub copy: FinaleCopy,
    pub photo_src: AttrValue,
    pub on_close: Callback<()>,
}

/// The congratulatory polaroid panel shown after a finale confirmation.
/// Visibility mirrors the controller's finale flag and nothing else.
#[function_component(FinaleModal)]
pub fn finale_modal(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-6 bg-black/90 backdrop-blur-md"
            role="presentation"
            onkeydown={on_keydown}
        >
            <div
                class="polaroid bg-white p-4 pb-12 rounded-sm shadow-2xl max-w-sm w-full relative"
                role="dialog"
                aria-modal="true"
                aria-label={props.copy.modal_caption.clone()}
            >
                <div class="relative overflow-hidden border-[12px] border-white shadow-inner">
                    <img
                        src={props.photo_src.clone()}
                        alt={props.copy.photo_alt.clone()}
                        class="w-full h-auto object-cover"
                    />
                </div>

                <div class="mt-6 text-center">
                    <h2 class="polaroid__caption text-3xl font-bold text-gray-800">
                        { props.copy.modal_caption.clone() }
                    </h2>
                    <p class="text-gray-400 text-xs mt-2 uppercase tracking-widest">
                        { props.copy.modal_subcaption.clone() }
                    </p>
                </div>

                <button
                    type="button"
                    class="absolute -top-4 -right-4 bg-rose-500 text-white w-10 h-10 rounded-full flex items-center justify-center shadow-lg"
                    aria-label="Close dialog"
                    onclick={on_close}
                >
                    {"\u{2715}"}
                </button>
            </div>
        </div>
    }
}
