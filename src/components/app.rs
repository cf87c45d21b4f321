use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

use super::{
    about::About, back_to_top::BackToTop, contact::ContactForm, gallery::Gallery, hero::Hero,
    menu_section::MenuSection, navbar::Navbar, navbar::SECTIONS,
};
use crate::config::SiteConfig;
use crate::dom::WindowListener;
use crate::model::MenuCatalog;
use crate::state::{NavAction, NavState, SectionOffset};
use crate::util::scroll_y;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
    pub catalog: Rc<MenuCatalog>,
}

fn section_offsets() -> Vec<SectionOffset> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    SECTIONS
        .iter()
        .filter_map(|&(id, _)| {
            let el = doc.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(SectionOffset {
                id: id.to_string(),
                offset_top: el.offset_top() as f64,
            })
        })
        .collect()
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let nav = {
        let cfg = props.config.nav.clone();
        use_reducer(move || NavState::new(cfg))
    };

    // Window-level listeners: scroll drives the navbar, Escape closes the mobile menu
    {
        let nav = nav.clone();
        use_effect_with((), move |_| {
            let on_scroll = {
                let nav = nav.clone();
                move |_: web_sys::Event| {
                    nav.dispatch(NavAction::Scrolled {
                        scroll_top: scroll_y(),
                        sections: section_offsets(),
                    })
                }
            };
            let on_key = move |e: web_sys::Event| {
                if e.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
                    nav.dispatch(NavAction::CloseMenu);
                }
            };
            let listeners = [
                WindowListener::new("scroll", on_scroll),
                WindowListener::new("keydown", on_key),
            ]
            .into_iter()
            .filter_map(|l| l.map_err(|e| log::warn!("app: listener failed: {}", e)).ok())
            .collect::<Vec<_>>();
            move || drop(listeners)
        });
    }

    let on_toggle = {
        let nav = nav.clone();
        Callback::from(move |_| nav.dispatch(NavAction::ToggleMenu))
    };
    let on_link = {
        let nav = nav.clone();
        Callback::from(move |_| nav.dispatch(NavAction::CloseMenu))
    };

    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <Navbar nav={(*nav).clone()} {on_toggle} {on_link} />
            <main>
                <Hero scroll_top={nav.scroll_top()} />
                <MenuSection catalog={props.catalog.clone()} />
                <About />
                <Gallery />
                <ContactForm />
            </main>
            <footer class="footer">
                <p>{"© Bistro Lumière. All rights reserved."}</p>
            </footer>
            <BackToTop show={nav.show_back_to_top} />
        </ContextProvider<Rc<SiteConfig>>>
    }
}
