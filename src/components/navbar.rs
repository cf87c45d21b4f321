use yew::prelude::*;

use crate::state::NavState;
use crate::util::scroll_to_section;

/// Page sections in document order: (element id, link label).
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("menu", "Menu"),
    ("about", "About"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub nav: NavState,
    pub on_toggle: Callback<()>,
    pub on_link: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let toggle = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let links = SECTIONS
        .iter()
        .map(|&(id, label)| {
            let onclick = {
                let cb = props.on_link.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_section(id);
                    cb.emit(());
                })
            };
            html! {
                <li>
                    <a
                        href={format!("#{}", id)}
                        class={classes!("nav-link", props.nav.is_active(id).then_some("active"))}
                        {onclick}
                    >
                        { label }
                    </a>
                </li>
            }
        })
        .collect::<Html>();
    let open = props.nav.menu_open.then_some("active");

    html! {
        <nav
            class={classes!("navbar", props.nav.scrolled.then_some("scrolled"))}
            style={format!("transform: {};", props.nav.navbar_transform())}
        >
            <div class="nav-container">
                <a href="#home" class="nav-logo">{"Bistro Lumière"}</a>
                <ul class={classes!("nav-menu", open)}>{ links }</ul>
                <div class={classes!("hamburger", open)} onclick={toggle}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
