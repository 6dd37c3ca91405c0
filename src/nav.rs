//! Site navigation behaviours: mobile menu toggle and active link state.

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    wire_menu_toggle(document);
    mark_active_link(document);
}

fn wire_menu_toggle(document: &web::Document) {
    let toggle = document.query_selector(".menu-toggle").ok().flatten();
    let nav = document.query_selector(".site-nav").ok().flatten();
    let (Some(toggle), Some(nav)) = (toggle, nav) else {
        log::debug!("[nav] no menu toggle on this page");
        return;
    };

    {
        let toggle = toggle.clone();
        let nav = nav.clone();
        dom::on_event(&toggle.clone().into(), "click", move |_| {
            let expanded = nav.class_list().toggle("active").unwrap_or(false);
            _ = toggle.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
        });
    }

    // Close when clicking outside the toggle and the menu.
    {
        let toggle = toggle.clone();
        let nav = nav.clone();
        dom::on_event(&document.clone().into(), "click", move |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
                return;
            };
            if !toggle.contains(Some(&target)) && !nav.contains(Some(&target)) {
                close_menu(&toggle, &nav);
            }
        });
    }

    // Close when following a navigation link.
    for link in dom::select_in(&nav, "a") {
        let toggle = toggle.clone();
        let nav = nav.clone();
        dom::on_event(&link.into(), "click", move |_| close_menu(&toggle, &nav));
    }
}

fn close_menu(toggle: &web::Element, nav: &web::Element) {
    _ = nav.class_list().remove_1("active");
    _ = toggle.set_attribute("aria-expanded", "false");
}

/// Highlight the nav link matching the current location.
fn mark_active_link(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let current = window.location().pathname().unwrap_or_default();
    for link in dom::select_all(document, ".site-nav a") {
        let Some(anchor) = link.dyn_ref::<web::HtmlAnchorElement>() else {
            continue;
        };
        let link_path = anchor.pathname();
        if current.ends_with(&link_path) || (current == "/" && link_path.ends_with("index.html")) {
            _ = link.class_list().add_1("active");
        }
    }
}
