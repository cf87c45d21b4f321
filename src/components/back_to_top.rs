use yew::prelude::*;

use crate::util::scroll_to_top;

#[derive(Properties, PartialEq, Clone)]
pub struct BackToTopProps {
    pub show: bool,
}

#[function_component]
pub fn BackToTop(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());
    html! {
        <button
            id="backToTop"
            class={classes!("back-to-top", props.show.then_some("show"))}
            aria-label="Back to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
