use yew::prelude::*;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::dom::Timeout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    /// Distinct per toast so a replacement remounts and restarts its timers.
    pub id: u32,
    pub text: AttrValue,
    pub kind: ToastKind,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub message: ToastMessage,
    pub on_done: Callback<()>,
}

/// Slides in shortly after mounting, slides out after a few seconds, then asks to be removed.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let cfg = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        let on_done = props.on_done.clone();
        let c = cfg.contact.clone();
        use_effect_with(props.message.id, move |_| {
            let show = {
                let shown = shown.clone();
                Timeout::new(c.toast_show_ms, move || shown.set(true))
            };
            let hide = Timeout::new(c.toast_hide_ms, move || shown.set(false));
            let remove = Timeout::new(c.toast_hide_ms + c.toast_remove_ms, move || on_done.emit(()));
            let timers = [show, hide, remove]
                .into_iter()
                .filter_map(|t| t.map_err(|e| log::warn!("toast: timer failed: {}", e)).ok())
                .collect::<Vec<_>>();
            move || drop(timers)
        });
    }

    html! {
        <div class={classes!("toast", props.message.kind.class(), (*shown).then_some("show"))}>
            { props.message.text.clone() }
        </div>
    }
}
