use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn window_scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn select_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

pub fn select_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

fn node_list_elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn attr_f64_or(el: &web::Element, name: &str, default: f64) -> f64 {
    match el.get_attribute(name) {
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                log::warn!("[config] bad {}=\"{}\"; using {}", name, raw, default);
                default
            }
        },
        None => default,
    }
}

pub fn attr_f32_or(el: &web::Element, name: &str, default: f32) -> f32 {
    attr_f64_or(el, name, default as f64) as f32
}

pub fn attr_u32_or(el: &web::Element, name: &str, default: u32) -> u32 {
    match el.get_attribute(name) {
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("[config] bad {}=\"{}\"; using {}", name, raw, default);
                default
            }
        },
        None => default,
    }
}

/// Boolean attribute: bare presence, "true" and "1" are true; "false" and
/// "0" are false; anything else keeps the default.
pub fn attr_bool_or(el: &web::Element, name: &str, default: bool) -> bool {
    match el.get_attribute(name) {
        Some(raw) => match raw.trim() {
            "" | "true" | "1" => true,
            "false" | "0" => false,
            other => {
                log::warn!("[config] bad {}=\"{}\"; using {}", name, other, default);
                default
            }
        },
        None => default,
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

/// Attach a handler for the lifetime of the page; the closure is leaked.
pub fn on_event(target: &web::EventTarget, kind: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        log::error!("[dom] failed to attach {} listener: {:?}", kind, e);
    }
    closure.forget();
}

/// Passive variant of [`on_event`], for scroll handlers that never call
/// `preventDefault`.
pub fn on_event_passive(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::error!("[dom] failed to attach {} listener: {:?}", kind, e);
    }
    closure.forget();
}

/// Run `f` once before the next paint.
pub fn next_frame(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

/// An attached listener that detaches itself on drop, for components with a
/// teardown surface.
pub struct ListenerHandle {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerHandle {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        Self::finish(target, kind, closure, None)
    }

    /// Same, but registered passive (scroll handlers never block the page).
    pub fn attach_passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        Self::finish(target, kind, closure, Some(opts))
    }

    fn finish(
        target: &web::EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(web::Event)>,
        opts: Option<web::AddEventListenerOptions>,
    ) -> Option<Self> {
        let attached = match &opts {
            Some(opts) => target.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                opts,
            ),
            None => target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()),
        };
        match attached {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => {
                log::error!("[dom] failed to attach {} listener: {:?}", kind, e);
                None
            }
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
