use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{AnimationEvent, Element, HtmlElement};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{Timeout, VisibilityObserver};
use crate::model::MenuCatalog;
use crate::state::{CategoryController, MenuAction};

#[derive(Properties, PartialEq, Clone)]
pub struct MenuSectionProps {
    pub catalog: Rc<MenuCatalog>,
}

fn item_key(category: usize, item: usize) -> String {
    format!("{}:{}", category, item)
}

#[function_component(MenuSection)]
pub fn menu_section(props: &MenuSectionProps) -> Html {
    let cfg = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let controller = {
        let catalog = props.catalog.clone();
        let unit = cfg.menu.stagger_unit_ms;
        use_reducer(move || CategoryController::new(&catalog, unit))
    };
    let section_ref = use_node_ref();
    let container_refs = use_memo(props.catalog.categories.len(), |n| {
        (0..*n).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });

    // Replay the active category whenever the section scrolls into view
    {
        let section_ref = section_ref.clone();
        let controller = controller.clone();
        let threshold = cfg.menu.section_threshold;
        use_effect_with((), move |_| {
            let observer = section_ref.cast::<Element>().and_then(|el| {
                VisibilityObserver::new(&el, threshold, None, move |visible| {
                    controller.dispatch(if visible {
                        MenuAction::SectionVisible
                    } else {
                        MenuAction::SectionHidden
                    });
                })
                .map_err(|e| log::warn!("menu: section observer unavailable: {}", e))
                .ok()
            });
            move || drop(observer)
        });
    }

    // Pending items get their class after the grace delay and a forced reflow,
    // so a class removed in the previous render restarts instead of continuing.
    {
        let pending = controller.pending_run();
        let active = controller.active_index();
        let controller = controller.clone();
        let container_refs = container_refs.clone();
        let grace = cfg.menu.reflow_grace_ms;
        use_effect_with(pending, move |pending| {
            let timer = (*pending).and_then(|run| {
                Timeout::new(grace, move || {
                    if let Some(el) = active
                        .and_then(|i| container_refs.get(i))
                        .and_then(|r| r.cast::<HtmlElement>())
                    {
                        let _ = el.offset_width();
                    }
                    controller.dispatch(MenuAction::ApplyPending { run });
                })
                .map_err(|e| log::warn!("menu: cannot schedule animation: {}", e))
                .ok()
            });
            move || drop(timer)
        });
    }

    let buttons = controller
        .categories()
        .iter()
        .zip(props.catalog.categories.iter())
        .enumerate()
        .map(|(ci, (state, cat))| {
            let onclick = {
                let controller = controller.clone();
                let id = state.id.clone();
                Callback::from(move |_: MouseEvent| controller.dispatch(MenuAction::Select(id.clone())))
            };
            let active = controller.is_shown(ci);
            html! {
                <button
                    class={classes!("category-btn", active.then_some("active"))}
                    data-category={state.id.clone()}
                    data-animation={state.animation.as_str()}
                    {onclick}
                >
                    { cat.label.clone() }
                </button>
            }
        })
        .collect::<Html>();

    let grids = props
        .catalog
        .categories
        .iter()
        .enumerate()
        .map(|(ci, cat)| {
            let items = cat
                .items
                .iter()
                .enumerate()
                .map(|(ii, item)| {
                    let view = controller.item_view(ci, ii);
                    let key = item_key(ci, ii);
                    // Only the item's own animation counts; children may animate too.
                    let onanimationend = {
                        let controller = controller.clone();
                        let key = key.clone();
                        Callback::from(move |e: AnimationEvent| {
                            let own = e
                                .target()
                                .and_then(|t| t.dyn_into::<Element>().ok())
                                .and_then(|el| el.get_attribute("data-item-key"))
                                .is_some_and(|k| k == key);
                            if own {
                                controller.dispatch(MenuAction::AnimationEnd {
                                    category: ci,
                                    item: ii,
                                });
                            }
                        })
                    };
                    html! {
                        <div
                            key={key.clone()}
                            class={classes!("menu-item", view.class)}
                            style={view.style()}
                            data-item-key={key}
                            {onanimationend}
                        >
                            <div class="menu-item-icon">{ item.icon.clone() }</div>
                            <div class="menu-item-body">
                                <div class="menu-item-header">
                                    <h3>{ item.name.clone() }</h3>
                                    <span class="price">{ item.price.clone() }</span>
                                </div>
                                <p>{ item.description.clone() }</p>
                            </div>
                        </div>
                    }
                })
                .collect::<Html>();
            html! {
                <div
                    class="menu-items"
                    data-category={cat.id.clone()}
                    style={format!("display: {};", controller.container_display(ci))}
                    ref={container_refs.get(ci).cloned().unwrap_or_default()}
                >
                    { items }
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="menu" class="menu" ref={section_ref}>
            <div class="container">
                <div class="section-header">
                    <h2>{"Our Menu"}</h2>
                    <p>{"Seasonal plates cooked to order"}</p>
                </div>
                <div class="menu-categories">{ buttons }</div>
                { grids }
            </div>
        </section>
    }
}
