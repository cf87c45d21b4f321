use std::rc::Rc;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{Interval, Timeout};
use crate::state::Typewriter;
use crate::util::scroll_to_section;

const TITLE: &str = "Savor Every Moment";

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub scroll_top: f64,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let cfg = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let typer = use_reducer(|| Typewriter::new(TITLE));
    let ticker = use_mut_ref(|| None::<Interval>);

    // Typing starts after a short pause, one char per tick
    {
        let typer = typer.clone();
        let ticker = ticker.clone();
        let start_ms = cfg.hero.typing_start_ms;
        let char_ms = cfg.hero.typing_char_ms;
        use_effect_with((), move |_| {
            let ticker_start = ticker.clone();
            let start = Timeout::new(start_ms, move || {
                let tick = Interval::new(char_ms, move || typer.dispatch(()))
                    .map_err(|e| log::warn!("hero: typing timer failed: {}", e))
                    .ok();
                *ticker_start.borrow_mut() = tick;
            })
            .map_err(|e| log::warn!("hero: typing timer failed: {}", e))
            .ok();
            move || {
                drop(start);
                ticker.borrow_mut().take();
            }
        });
    }
    {
        let ticker = ticker.clone();
        use_effect_with(typer.is_done(), move |done| {
            if *done {
                ticker.borrow_mut().take();
            }
            || ()
        });
    }

    let content_style = format!(
        "transform: translateY({}px);",
        props.scroll_top * cfg.hero.parallax_content
    );
    let image_style = format!(
        "transform: translateY({}px);",
        props.scroll_top * cfg.hero.parallax_image
    );
    let to_menu = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("menu");
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-content" style={content_style}>
                <h1 class="hero-title" aria-label={TITLE}>{ typer.visible() }</h1>
                <p class="hero-subtitle">{"French bistro cooking with a seasonal twist, right in the heart of town."}</p>
                <a href="#menu" class="btn btn-primary" onclick={to_menu}>{"View Menu"}</a>
            </div>
            <div class="hero-image" style={image_style}>
                <span class="hero-emoji">{"🍽️"}</span>
            </div>
        </section>
    }
}
