//! Pill navigation bar: hover-circle grow with label swap, logo spin and the
//! mobile popover. The original design drives these with a tween library;
//! here the tweens are CSS transitions declared from Rust, and the
//! hover-circle geometry comes from `core::pill`.

use crate::constants::{
    EASE_IN_CUBIC, EASE_OUT_CUBIC, PILL_BASE_COLOR, PILL_BG_COLOR, PILL_HOVER_ENTER_MS,
    PILL_HOVER_LABEL_DROP_PX, PILL_HOVER_LEAVE_MS, PILL_HOVER_SCALE, PILL_HOVER_TEXT_COLOR,
    PILL_LABEL_LIFT_PX, PILL_LOAD_MS, PILL_LOAD_STAGGER_MS, PILL_LOGO_SPIN_MS, PILL_MENU_MS,
    PILL_TEXT_COLOR,
};
use crate::core::pill::hover_circle;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    let Some(nav) = document.query_selector(".pill-nav").ok().flatten() else {
        log::debug!("[pill] no pill nav on this page");
        return;
    };
    if let Some(nav) = nav.dyn_ref::<web::HtmlElement>() {
        dom::set_style(nav, "--base", PILL_BASE_COLOR);
        dom::set_style(nav, "--pill-bg", PILL_BG_COLOR);
        dom::set_style(nav, "--hover-text", PILL_HOVER_TEXT_COLOR);
        dom::set_style(nav, "--pill-text", PILL_TEXT_COLOR);
    }

    let pills: Vec<web::HtmlElement> = dom::select_all(document, ".pill")
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();
    layout_pills(&pills);
    for pill in &pills {
        wire_hover(pill);
    }

    // Pill sizes move with font metrics, so re-run the layout on resize.
    if let Some(window) = web::window() {
        let pills = pills.clone();
        dom::on_event(&window.into(), "resize", move |_| layout_pills(&pills));
    }

    wire_logo_spin(document);
    wire_mobile_menu(document);
    play_load_animation(document);
}

/// Size and park each pill's hover circle from the current pill box.
fn layout_pills(pills: &[web::HtmlElement]) {
    for pill in pills {
        let rect = pill.get_bounding_client_rect();
        let (w, h) = (rect.width(), rect.height());
        if w <= 0.0 || h <= 0.0 {
            continue;
        }
        let geom = hover_circle(w, h);
        if let Some(circle) = pill_part(pill, ".hover-circle") {
            dom::set_style(&circle, "width", &format!("{}px", geom.diameter));
            dom::set_style(&circle, "height", &format!("{}px", geom.diameter));
            dom::set_style(&circle, "bottom", &format!("-{}px", geom.bottom_offset));
            dom::set_style(&circle, "left", "50%");
            dom::set_style(&circle, "transform-origin", &format!("50% {}px", geom.origin_y));
            dom::set_style(&circle, "transform", "translateX(-50%) scale(0)");
        }
        if let Some(label) = pill_part(pill, ".pill-label") {
            dom::set_style(&label, "transform", "translateY(0px)");
        }
        if let Some(hover_label) = pill_part(pill, ".pill-label-hover") {
            dom::set_style(
                &hover_label,
                "transform",
                &format!("translateY({}px)", (h + PILL_HOVER_LABEL_DROP_PX).ceil()),
            );
            dom::set_style(&hover_label, "opacity", "0");
        }
    }
}

fn pill_part(pill: &web::HtmlElement, selector: &str) -> Option<web::HtmlElement> {
    pill.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into().ok())
}

fn wire_hover(pill: &web::HtmlElement) {
    let Some(circle) = pill_part(pill, ".hover-circle") else {
        return;
    };
    let label = pill_part(pill, ".pill-label");
    let hover_label = pill_part(pill, ".pill-label-hover");

    {
        let pill_box = pill.clone();
        let circle = circle.clone();
        let label = label.clone();
        let hover_label = hover_label.clone();
        dom::on_event(&pill.clone().into(), "mouseenter", move |_| {
            let h = pill_box.get_bounding_client_rect().height();
            let timing = format!("{}ms {}", PILL_HOVER_ENTER_MS, EASE_OUT_CUBIC);
            set_transition(&circle, &timing);
            dom::set_style(
                &circle,
                "transform",
                &format!("translateX(-50%) scale({})", PILL_HOVER_SCALE),
            );
            if let Some(label) = &label {
                set_transition(label, &timing);
                dom::set_style(
                    label,
                    "transform",
                    &format!("translateY(-{}px)", h + PILL_LABEL_LIFT_PX),
                );
            }
            if let Some(hover_label) = &hover_label {
                set_transition(hover_label, &timing);
                dom::set_style(hover_label, "transform", "translateY(0px)");
                dom::set_style(hover_label, "opacity", "1");
            }
        });
    }
    {
        let pill_box = pill.clone();
        let hover_label = hover_label.clone();
        dom::on_event(&pill.clone().into(), "mouseleave", move |_| {
            let h = pill_box.get_bounding_client_rect().height();
            let timing = format!("{}ms {}", PILL_HOVER_LEAVE_MS, EASE_IN_CUBIC);
            set_transition(&circle, &timing);
            dom::set_style(&circle, "transform", "translateX(-50%) scale(0)");
            if let Some(label) = &label {
                set_transition(label, &timing);
                dom::set_style(label, "transform", "translateY(0px)");
            }
            if let Some(hover_label) = &hover_label {
                set_transition(hover_label, &timing);
                dom::set_style(
                    hover_label,
                    "transform",
                    &format!("translateY({}px)", (h + PILL_HOVER_LABEL_DROP_PX).ceil()),
                );
                dom::set_style(hover_label, "opacity", "0");
            }
        });
    }
}

fn set_transition(el: &web::HtmlElement, timing: &str) {
    dom::set_style(
        el,
        "transition",
        &format!("transform {timing}, opacity {timing}"),
    );
}

fn wire_logo_spin(document: &web::Document) {
    let Some(logo) = document.query_selector(".pill-logo").ok().flatten() else {
        return;
    };
    let Some(img) = logo
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    dom::on_event(&logo.into(), "mouseenter", move |_| {
        // Snap back to 0 without animating, then spin a full turn.
        dom::set_style(&img, "transition", "none");
        dom::set_style(&img, "transform", "rotate(0deg)");
        let img = img.clone();
        dom::next_frame(move || {
            dom::set_style(
                &img,
                "transition",
                &format!("transform {}ms {}", PILL_LOGO_SPIN_MS, EASE_OUT_CUBIC),
            );
            dom::set_style(&img, "transform", "rotate(360deg)");
        });
    });
}

fn wire_mobile_menu(document: &web::Document) {
    let Some(button) = document.query_selector(".mobile-menu-button").ok().flatten() else {
        return;
    };
    let popover = document
        .query_selector(".mobile-menu-popover")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let lines: Vec<web::HtmlElement> = dom::select_in(&button, ".hamburger-line")
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();

    if let Some(popover) = &popover {
        dom::set_style(popover, "visibility", "hidden");
        dom::set_style(popover, "opacity", "0");
    }

    let open = Rc::new(Cell::new(false));
    let set_state: Rc<dyn Fn(bool)> = Rc::new({
        let popover = popover.clone();
        move |is_open: bool| apply_menu_state(&lines, popover.as_ref(), is_open)
    });

    {
        let open = open.clone();
        let set_state = set_state.clone();
        dom::on_event(&button.clone().into(), "click", move |_| {
            let next = !open.get();
            open.set(next);
            set_state(next);
        });
    }
    if let Some(popover) = &popover {
        for link in dom::select_in(popover, ".mobile-menu-link") {
            let open = open.clone();
            let set_state = set_state.clone();
            dom::on_event(&link.into(), "click", move |_| {
                open.set(false);
                set_state(false);
            });
        }
    }
}

fn apply_menu_state(lines: &[web::HtmlElement], popover: Option<&web::HtmlElement>, open: bool) {
    let timing = format!("{}ms {}", PILL_MENU_MS, EASE_OUT_CUBIC);
    if lines.len() >= 2 {
        for line in &lines[..2] {
            dom::set_style(line, "transition", &format!("transform {timing}"));
        }
        if open {
            dom::set_style(&lines[0], "transform", "rotate(45deg) translateY(4px)");
            dom::set_style(&lines[1], "transform", "rotate(-45deg) translateY(-4px)");
        } else {
            dom::set_style(&lines[0], "transform", "none");
            dom::set_style(&lines[1], "transform", "none");
        }
    }
    let Some(popover) = popover else {
        return;
    };
    if open {
        dom::set_style(
            popover,
            "transition",
            &format!("opacity {timing}, transform {timing}, visibility 0s 0s"),
        );
        dom::set_style(popover, "visibility", "visible");
        dom::set_style(popover, "opacity", "1");
        dom::set_style(popover, "transform", "translateY(0px)");
    } else {
        // Visibility flips only once the fade-out has finished.
        dom::set_style(
            popover,
            "transition",
            &format!(
                "opacity {timing}, transform {timing}, visibility 0s {}ms",
                PILL_MENU_MS
            ),
        );
        dom::set_style(popover, "visibility", "hidden");
        dom::set_style(popover, "opacity", "0");
        dom::set_style(popover, "transform", "translateY(-10px)");
    }
}

fn play_load_animation(document: &web::Document) {
    let logo = document
        .query_selector(".pill-logo")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let items = document
        .query_selector(".pill-nav-items")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if logo.is_none() && items.is_none() {
        return;
    }
    if let Some(logo) = &logo {
        dom::set_style(logo, "transition", "none");
        dom::set_style(logo, "transform", "scale(0)");
    }
    if let Some(items) = &items {
        dom::set_style(items, "transition", "none");
        dom::set_style(items, "overflow", "hidden");
        dom::set_style(items, "max-width", "0px");
    }
    dom::next_frame(move || {
        if let Some(logo) = &logo {
            dom::set_style(
                logo,
                "transition",
                &format!("transform {}ms {}", PILL_LOAD_MS, EASE_OUT_CUBIC),
            );
            dom::set_style(logo, "transform", "scale(1)");
        }
        if let Some(items) = &items {
            dom::set_style(
                items,
                "transition",
                &format!(
                    "max-width {}ms {} {}ms",
                    PILL_LOAD_MS, EASE_OUT_CUBIC, PILL_LOAD_STAGGER_MS
                ),
            );
            dom::set_style(items, "max-width", "100vw");
        }
    });
}
