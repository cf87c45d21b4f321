use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::Timeout;
use crate::state::contact::{SUCCESS_MESSAGE, validate};

use super::toast::{Toast, ToastKind, ToastMessage};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let cfg = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);
    let toast = use_state(|| None::<ToastMessage>);
    let next_toast_id = use_mut_ref(|| 0_u32);
    let submit_timer = use_mut_ref(|| None::<Timeout>);

    let show_toast = {
        let toast = toast.clone();
        let next_toast_id = next_toast_id.clone();
        Callback::from(move |(text, kind): (String, ToastKind)| {
            let mut id = next_toast_id.borrow_mut();
            *id = id.wrapping_add(1);
            toast.set(Some(ToastMessage {
                id: *id,
                text: text.into(),
                kind,
            }));
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };

    let onsubmit = {
        let (name, email, message) = (name.clone(), email.clone(), message.clone());
        let sending = sending.clone();
        let show_toast = show_toast.clone();
        let submit_timer = submit_timer.clone();
        let delay = cfg.contact.submit_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            let submission = match validate(&name, &email, &message) {
                Ok(s) => s,
                Err(err) => {
                    show_toast.emit((err.to_string(), ToastKind::Error));
                    return;
                }
            };
            log::info!(
                "contact: simulated send from {} <{}>, {} chars",
                submission.name,
                submission.email,
                submission.message.chars().count()
            );
            sending.set(true);
            let done = {
                let (name, email, message) = (name.clone(), email.clone(), message.clone());
                let sending = sending.clone();
                let show_toast = show_toast.clone();
                move || {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    sending.set(false);
                    show_toast.emit((SUCCESS_MESSAGE.to_string(), ToastKind::Success));
                }
            };
            match Timeout::new(delay, done) {
                Ok(t) => *submit_timer.borrow_mut() = Some(t),
                Err(e) => {
                    log::warn!("contact: submit timer failed: {}", e);
                    sending.set(false);
                }
            }
        })
    };

    let toast_view = match &*toast {
        Some(msg) => {
            let on_done = {
                let toast = toast.clone();
                Callback::from(move |_| toast.set(None))
            };
            html! { <Toast key={msg.id} message={msg.clone()} {on_done} /> }
        }
        None => html! {},
    };

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <h2>{"Contact Us"}</h2>
                    <p>{"Reservations, private events, or just to say hello"}</p>
                </div>
                <form id="contactForm" class="contact-form" {onsubmit}>
                    <input type="text" name="name" placeholder="Your Name"
                        value={(*name).clone()} oninput={on_name} />
                    <input type="email" name="email" placeholder="Your Email"
                        value={(*email).clone()} oninput={on_email} />
                    <textarea name="message" rows="5" placeholder="Your Message"
                        value={(*message).clone()} oninput={on_message} />
                    <button type="submit" class="btn btn-primary" disabled={*sending}>
                        if *sending {
                            <span class="loading"></span>{" Sending..."}
                        } else {
                            {"Send Message"}
                        }
                    </button>
                </form>
            </div>
            { toast_view }
        </section>
    }
}
