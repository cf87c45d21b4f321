use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{Interval, VisibilityObserver};
use crate::state::CounterBoard;

use super::reveal::Reveal;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🌿", "Fresh Ingredients", "Produce from local farms, delivered every morning."),
    ("👨‍🍳", "Expert Chefs", "A kitchen team trained in classic French technique."),
    ("🍷", "Curated Wines", "A cellar chosen to match every plate on the menu."),
];

const STATS: &[(&str, &str)] = &[
    ("15+", "Years of Service"),
    ("120", "Dishes Perfected"),
    ("5000+", "Happy Guests"),
];

#[function_component(About)]
pub fn about() -> Html {
    let cfg = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let board = {
        let speed = cfg.counter.speed;
        use_reducer(move || CounterBoard::new(STATS.iter().map(|(label, _)| *label), speed))
    };
    let stats_ref = use_node_ref();
    let ticker = use_mut_ref(|| None::<Interval>);
    let started = use_mut_ref(|| false);

    // Count once, the first time the stats block is seen
    {
        let stats_ref = stats_ref.clone();
        let board = board.clone();
        let ticker = ticker.clone();
        let started = started.clone();
        let tick_ms = cfg.counter.tick_ms;
        use_effect_with((), move |_| {
            let ticker_start = ticker.clone();
            let observer = stats_ref.cast::<Element>().and_then(|el| {
                VisibilityObserver::new(&el, 0.0, None, move |visible| {
                    if !visible || *started.borrow() {
                        return;
                    }
                    *started.borrow_mut() = true;
                    let board = board.clone();
                    *ticker_start.borrow_mut() = Interval::new(tick_ms, move || board.dispatch(()))
                        .map_err(|e| log::warn!("about: counter timer failed: {}", e))
                        .ok();
                })
                .map_err(|e| log::warn!("about: stats observer unavailable: {}", e))
                .ok()
            });
            move || {
                drop(observer);
                ticker.borrow_mut().take();
            }
        });
    }
    {
        let ticker = ticker.clone();
        use_effect_with(board.is_done(), move |done| {
            if *done {
                ticker.borrow_mut().take();
            }
            || ()
        });
    }

    let features = FEATURES
        .iter()
        .map(|&(icon, title, text)| {
            html! {
                <Reveal class="feature-card">
                    <div class="feature-icon">{ icon }</div>
                    <h3>{ title }</h3>
                    <p>{ text }</p>
                </Reveal>
            }
        })
        .collect::<Html>();
    let stats = STATS
        .iter()
        .zip(board.counters.iter())
        .map(|(&(_, caption), counter)| {
            html! {
                <Reveal class="stat">
                    <h3>{ counter.display() }</h3>
                    <p>{ caption }</p>
                </Reveal>
            }
        })
        .collect::<Html>();

    html! {
        <section id="about" class="about">
            <div class="container">
                <div class="section-header">
                    <h2>{"About Us"}</h2>
                    <p>{"A neighborhood bistro since 2010"}</p>
                </div>
                <div class="features">{ features }</div>
                <div class="about-stats" ref={stats_ref}>{ stats }</div>
            </div>
        </section>
    }
}
