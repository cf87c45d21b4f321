use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::VisibilityObserver;

#[derive(Properties, PartialEq, Clone)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Html,
}

/// Wrapper that fades its children in the first time it enters the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let cfg = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let threshold = cfg.reveal.threshold;
        let margin = cfg.reveal.root_margin.clone();
        use_effect_with(*revealed, move |done| {
            let observer = if *done {
                None
            } else {
                node.cast::<Element>().and_then(|el| {
                    VisibilityObserver::new(&el, threshold, Some(margin.as_str()), move |visible| {
                        if visible {
                            revealed.set(true);
                        }
                    })
                    .map_err(|e| log::warn!("reveal: observer unavailable: {}", e))
                    .ok()
                })
            };
            move || drop(observer)
        });
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*revealed).then_some("animate"))}
            onclick={props.onclick.clone()}
        >
            { props.children.clone() }
        </div>
    }
}
