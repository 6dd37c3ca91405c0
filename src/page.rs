//! Scroll-linked page effects: smooth anchor scrolling, reveal-on-scroll,
//! the scroll progress indicator, parallax and the body load state.
//!
//! Reveal, progress and parallax share one coalesced tick so a burst of
//! scroll events costs a single layout read/write pass.

use crate::constants::{PARALLAX_DEFAULT_SPEED, REVEAL_POINT_PX};
use crate::dom;
use crate::schedule::FrameCoalescer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn init(document: &web::Document) {
    wire_anchor_scrolling(document);
    wire_scroll_effects(document);
    wire_load_state(document);
}

/// Intercept same-page anchor clicks: smooth-scroll to the target and push
/// the fragment onto the history. Bare `#`/`#!` anchors are swallowed.
fn wire_anchor_scrolling(document: &web::Document) {
    for link in dom::select_all(document, "a[href^='#']") {
        let doc = document.clone();
        let link_el = link.clone();
        dom::on_event(&link.into(), "click", move |ev| {
            let Some(href) = link_el.get_attribute("href") else {
                return;
            };
            if href == "#" || href == "#!" {
                ev.prevent_default();
                return;
            }
            let Some(target) = doc.get_element_by_id(&href[1..]) else {
                return;
            };
            ev.prevent_default();
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
            if let Some(window) = web::window() {
                if let Ok(history) = window.history() {
                    _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
                }
            }
        });
    }
}

fn wire_scroll_effects(document: &web::Document) {
    let reveals = dom::select_all(document, ".reveal");
    let parallax: Vec<(web::HtmlElement, f64)> = dom::select_all(document, ".parallax")
        .into_iter()
        .filter_map(|el| {
            let speed = dom::attr_f64_or(&el, "data-speed", PARALLAX_DEFAULT_SPEED);
            el.dyn_into::<web::HtmlElement>().ok().map(|el| (el, speed))
        })
        .collect();
    let indicator = create_scroll_indicator(document);
    if reveals.is_empty() && parallax.is_empty() && indicator.is_none() {
        return;
    }

    let doc = document.clone();
    let coalescer = FrameCoalescer::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        let offset = dom::window_scroll_y(&window);
        let vh = dom::viewport_height(&window);

        for el in &reveals {
            if el.get_bounding_client_rect().top() < vh - REVEAL_POINT_PX {
                _ = el.class_list().add_1("active");
            }
        }

        if let Some(bar) = &indicator {
            let doc_height = doc
                .document_element()
                .map(|e| f64::from(e.scroll_height()))
                .unwrap_or(0.0);
            let track = (doc_height - vh).max(1.0);
            let progress = (offset / track).clamp(0.0, 1.0);
            dom::set_style(bar, "transform", &format!("scaleX({})", progress));
        }

        for (el, speed) in &parallax {
            dom::set_style(el, "transform", &format!("translateY({}px)", -offset * speed));
        }
    });

    if let Some(window) = web::window() {
        let target: web::EventTarget = window.into();
        let c = coalescer.clone();
        dom::on_event_passive(&target, "scroll", move |_| c.request());
        let c = coalescer.clone();
        dom::on_event(&target, "resize", move |_| c.request());
    }
    // Settle initial state without waiting for the first scroll.
    coalescer.request();
}

fn create_scroll_indicator(document: &web::Document) -> Option<web::HtmlElement> {
    let body = document.body()?;
    let el = document.create_element("div").ok()?;
    el.set_class_name("scroll-indicator");
    let el: web::HtmlElement = el.dyn_into().ok()?;
    body.append_child(&el).ok()?;
    Some(el)
}

fn wire_load_state(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    dom::on_event(&window.into(), "load", move |_| {
        if let Some(body) = doc.body() {
            _ = body.class_list().add_1("loaded");
        }
    });
}
