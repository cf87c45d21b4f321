//! RAII wrappers around browser callbacks: timers, window listeners and
//! intersection observers. Dropping a handle cancels or detaches it.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global `window`")]
    NoWindow,
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(v: JsValue) -> Self {
        DomError::Js(js_error_message(&v))
    }
}

pub fn js_error_message(v: &JsValue) -> String {
    v.as_string()
        .or_else(|| {
            v.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", v))
}

/// Browsers take a signed delay; larger values saturate instead of wrapping negative.
fn delay_arg(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// One-shot `setTimeout`; cleared if dropped before it fires.
pub struct Timeout {
    id: i32,
    _cb: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(ms: u32, f: impl FnOnce() + 'static) -> Result<Self, DomError> {
        let mut f = Some(f);
        let cb = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let id = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_arg(ms),
        )?;
        Ok(Self { id, _cb: cb })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// Repeating `setInterval`; cleared on drop.
pub struct Interval {
    id: i32,
    _cb: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(ms: u32, f: impl FnMut() + 'static) -> Result<Self, DomError> {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_arg(ms),
        )?;
        Ok(Self { id, _cb: cb })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

/// Event listener on `window` (scroll, keydown, ...); removed on drop.
pub struct WindowListener {
    event: &'static str,
    cb: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, f: impl FnMut(web_sys::Event) + 'static) -> Result<Self, DomError> {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
        window()?.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
        Ok(Self { event, cb })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            let _ = win.remove_event_listener_with_callback(self.event, self.cb.as_ref().unchecked_ref());
        }
    }
}

/// Watches one element's viewport intersection; disconnects on drop.
/// The callback receives `isIntersecting` for every reported entry.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _cb: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new(
        target: &Element,
        threshold: f64,
        root_margin: Option<&str>,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Result<Self, DomError> {
        let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting());
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);
        Ok(Self { observer, _cb: cb })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_delays_saturate() {
        assert_eq!(delay_arg(20), 20);
        assert_eq!(delay_arg(i32::MAX as u32), i32::MAX);
        assert_eq!(delay_arg(u32::MAX), i32::MAX);
        assert_eq!(delay_arg(i32::MAX as u32 + 1), i32::MAX);
    }
}
