//! The scratch-off reveal: a static content layer underneath an opaque
//! cover canvas that pointer gestures erase with destination-out fills.
//!
//! Every move event over the canvas erases — there is no drag gating, so
//! hovering without a held button scratches too. That mirrors the card's
//! intended feel and must not be "fixed" to require a pressed button.

use std::cell::RefCell;
use std::rc::Rc;

use lovenote_card::{BoundingBox, SURFACE_HEIGHT, SURFACE_WIDTH, ScratchSurface};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement,
    MouseEvent, TouchEvent,
};
use yew::prelude::*;

/// Cover asset, loaded fresh per session via a cache-busting query.
pub const COVER_IMAGE: &str = "static/assets/img/scratch-cover.jpg";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub hidden_message: AttrValue,
    pub hidden_emoji: AttrValue,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Paint the freshly loaded cover over a cleared canvas and arm the raster
/// model. Clearing first means a defensive remount never shows an
/// already-scratched overlay.
fn initialize_overlay(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    img: &HtmlImageElement,
    surface: &Rc<RefCell<ScratchSurface>>,
) {
    let w = f64::from(canvas.width());
    let h = f64::from(canvas.height());
    let _ = ctx.set_global_composite_operation("source-over");
    ctx.clear_rect(0.0, 0.0, w, h);
    let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w, h);
    surface.borrow_mut().initialize();
}

/// Map one pointer sample into surface space and punch the hole, both in the
/// raster model and on the canvas. A no-op until the cover has loaded.
fn erase_from_point(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    surface: &Rc<RefCell<ScratchSurface>>,
    client_x: f64,
    client_y: f64,
) {
    let rect = canvas.get_bounding_client_rect();
    let bbox = BoundingBox {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    };

    let mut model = surface.borrow_mut();
    if !model.is_initialized() {
        return;
    }
    let (x, y) = model.map_pointer(client_x, client_y, bbox);
    model.erase_at(x, y);
    let radius = model.radius();
    drop(model);

    let _ = ctx.set_global_composite_operation("destination-out");
    ctx.begin_path();
    let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
    ctx.fill();
}

#[function_component(ScratchCard)]
pub fn scratch_card(props: &Props) -> Html {
    let canvas_ref = use_node_ref();
    let surface = use_mut_ref(ScratchSurface::card_default);

    {
        let canvas_ref = canvas_ref.clone();
        let surface = surface.clone();
        use_effect_with((), move |()| {
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let ctx = canvas.as_ref().and_then(context_2d);

            let mut on_load: Option<Closure<dyn FnMut()>> = None;
            let mut on_mouse: Option<Closure<dyn FnMut(MouseEvent)>> = None;
            let mut on_touch: Option<Closure<dyn FnMut(TouchEvent)>> = None;
            let mut cover: Option<HtmlImageElement> = None;

            if let (Some(canvas), Some(ctx)) = (canvas.clone(), ctx) {
                if let Ok(img) = HtmlImageElement::new() {
                    let load_closure = {
                        let canvas = canvas.clone();
                        let ctx = ctx.clone();
                        let img = img.clone();
                        let surface = surface.clone();
                        Closure::wrap(Box::new(move || {
                            initialize_overlay(&canvas, &ctx, &img, &surface);
                        }) as Box<dyn FnMut()>)
                    };
                    img.set_onload(Some(load_closure.as_ref().unchecked_ref()));
                    // If the cover never loads, onload never fires and the
                    // surface degrades silently to the bare reveal layer.
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    img.set_src(&crate::paths::cache_busted(
                        COVER_IMAGE,
                        js_sys::Date::now() as u64,
                    ));
                    on_load = Some(load_closure);
                    cover = Some(img);
                }

                let mouse_closure = {
                    let canvas = canvas.clone();
                    let ctx = ctx.clone();
                    let surface = surface.clone();
                    Closure::wrap(Box::new(move |e: MouseEvent| {
                        erase_from_point(
                            &canvas,
                            &ctx,
                            &surface,
                            f64::from(e.client_x()),
                            f64::from(e.client_y()),
                        );
                    }) as Box<dyn FnMut(MouseEvent)>)
                };
                let _ = canvas.add_event_listener_with_callback(
                    "mousemove",
                    mouse_closure.as_ref().unchecked_ref(),
                );

                let touch_closure = {
                    let canvas = canvas.clone();
                    let ctx = ctx.clone();
                    let surface = surface.clone();
                    Closure::wrap(Box::new(move |e: TouchEvent| {
                        // The gesture belongs to the surface: no scroll/zoom.
                        e.prevent_default();
                        if let Some(touch) = e.touches().get(0) {
                            erase_from_point(
                                &canvas,
                                &ctx,
                                &surface,
                                f64::from(touch.client_x()),
                                f64::from(touch.client_y()),
                            );
                        }
                    }) as Box<dyn FnMut(TouchEvent)>)
                };
                let options = AddEventListenerOptions::new();
                options.set_passive(false);
                let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
                    "touchmove",
                    touch_closure.as_ref().unchecked_ref(),
                    &options,
                );

                on_mouse = Some(mouse_closure);
                on_touch = Some(touch_closure);
            }

            move || {
                // Listeners live exactly as long as the mounted surface;
                // a torn-down raster must never receive erase callbacks.
                if let Some(canvas) = canvas {
                    if let Some(mouse) = &on_mouse {
                        let _ = canvas.remove_event_listener_with_callback(
                            "mousemove",
                            mouse.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(touch) = &on_touch {
                        let _ = canvas.remove_event_listener_with_callback(
                            "touchmove",
                            touch.as_ref().unchecked_ref(),
                        );
                    }
                }
                if let Some(img) = &cover {
                    img.set_onload(None);
                }
                drop(on_load);
                drop(on_mouse);
                drop(on_touch);
            }
        });
    }

    html! {
        <div class="scratch-frame w-[350px] h-[450px] relative rounded-3xl overflow-hidden shadow-2xl border-4 border-white/30">
            <div class="absolute inset-0 bg-rose-100 flex flex-col items-center justify-center p-8 text-center">
                <p class="text-rose-600 font-bold text-2xl italic leading-relaxed">
                    { props.hidden_message.clone() }
                </p>
                <span class="mt-4 text-4xl">{ props.hidden_emoji.clone() }</span>
            </div>
            <canvas
                ref={canvas_ref}
                width={SURFACE_WIDTH.to_string()}
                height={SURFACE_HEIGHT.to_string()}
                class="absolute top-0 left-0 cursor-crosshair"
                style="touch-action: none;"
            />
        </div>
    }
}
