//! Contact form stub: intercepts submission, validates in pure Rust and
//! shows the outcome message. No network I/O by design.

use crate::core::form::{validate, SUCCESS_MESSAGE};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    let Some(form_el) = document.get_element_by_id("contactForm") else {
        log::debug!("[form] no contact form on this page");
        return;
    };
    let Ok(form) = form_el.dyn_into::<web::HtmlFormElement>() else {
        log::warn!("[form] #contactForm is not a form element");
        return;
    };

    let doc = document.clone();
    let form_submit = form.clone();
    dom::on_event(&form.into(), "submit", move |ev| {
        ev.prevent_default();
        let name = input_value(&doc, "name");
        let email = input_value(&doc, "email");
        let subject = input_value(&doc, "subject");
        let message = textarea_value(&doc, "message");
        match validate(&name, &email, &subject, &message) {
            Ok(()) => {
                // Stub: a real deployment would hand this off to a form
                // service or backend endpoint.
                log::info!("[form] submission accepted for {}", email);
                show_message(&doc, SUCCESS_MESSAGE, true);
                form_submit.reset();
            }
            Err(err) => show_message(&doc, err.message(), false),
        }
    });
}

fn input_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}

fn show_message(document: &web::Document, text: &str, success: bool) {
    let wrap = document.get_element_by_id("formMessage");
    let slot = document.get_element_by_id("formMessageText");
    let (Some(wrap), Some(slot)) = (wrap, slot) else {
        return;
    };
    slot.set_text_content(Some(text));
    if let Some(wrap) = wrap.dyn_ref::<web::HtmlElement>() {
        dom::set_style(wrap, "display", "block");
        dom::set_style(
            wrap,
            "border-left-color",
            if success {
                "var(--color-green-medium)"
            } else {
                "var(--color-indigo)"
            },
        );
    }
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Nearest);
    wrap.scroll_into_view_with_scroll_into_view_options(&opts);
}
