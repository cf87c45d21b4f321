use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::dom::WindowListener;

use super::reveal::Reveal;

const TILES: &[(&str, &str)] = &[
    ("🥐", "Morning pastries"),
    ("🍝", "Handmade pasta"),
    ("🧀", "Cheese board"),
    ("🍓", "Summer tart"),
    ("🥂", "Terrace evenings"),
    ("🔥", "Open kitchen"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub icon: AttrValue,
    pub caption: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    // Escape closes while open
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::new("keydown", move |e: web_sys::Event| {
                if e.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
                    on_close.emit(());
                }
            })
            .map_err(|e| log::warn!("lightbox: keydown listener failed: {}", e))
            .ok();
            move || drop(listener)
        });
    }

    let close_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="lightbox" onclick={close_backdrop}>
            <div class="lightbox-content" onclick={keep_open}>
                <span class="close-lightbox" onclick={close_btn}>{"×"}</span>
                <div class="lightbox-image">
                    <i>{ props.icon.clone() }</i>
                    <h3>{ props.caption.clone() }</h3>
                </div>
            </div>
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let open = use_state(|| None::<usize>);

    let tiles = TILES
        .iter()
        .enumerate()
        .map(|(i, &(icon, caption))| {
            let onclick = {
                let open = open.clone();
                Callback::from(move |_: MouseEvent| open.set(Some(i)))
            };
            html! {
                <Reveal class="gallery-item" {onclick}>
                    <i>{ icon }</i>
                    <h3>{ caption }</h3>
                </Reveal>
            }
        })
        .collect::<Html>();

    let lightbox = match (*open).and_then(|i| TILES.get(i)) {
        Some(&(icon, caption)) => {
            let on_close = {
                let open = open.clone();
                Callback::from(move |_| open.set(None))
            };
            html! { <Lightbox {icon} {caption} {on_close} /> }
        }
        None => html! {},
    };

    html! {
        <section id="gallery" class="gallery">
            <div class="container">
                <div class="section-header">
                    <h2>{"Gallery"}</h2>
                    <p>{"A look inside the kitchen and dining room"}</p>
                </div>
                <div class="gallery-grid">{ tiles }</div>
            </div>
            { lightbox }
        </section>
    }
}
