//! Text-splitting reveal: the element's text is rebuilt as per-character or
//! per-word spans, then staggered in the first time it scrolls into view.

use crate::constants::{
    EASE_STANDARD, SPLIT_DELAY_MS, SPLIT_DURATION_MS, SPLIT_FROM_Y_PX, SPLIT_OBSERVER_MARGIN,
    SPLIT_OBSERVER_THRESHOLD,
};
use crate::core::text::{stagger_total_ms, SplitKind};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Split every tagged element on the page. Instances are page-lifetime;
/// they are intentionally leaked.
pub fn init_all(document: &web::Document) {
    for element in dom::select_all(document, "[data-split-text]") {
        let kind = match element.get_attribute("data-split-type") {
            Some(raw) => SplitKind::parse(&raw).unwrap_or_else(|| {
                log::warn!("[split] bad data-split-type \"{}\"; using chars", raw);
                SplitKind::Chars
            }),
            None => SplitKind::Chars,
        };
        let delay = dom::attr_u32_or(&element, "data-split-delay", SPLIT_DELAY_MS);
        let duration = dom::attr_u32_or(&element, "data-split-duration", SPLIT_DURATION_MS);
        if let Some(split) = SplitText::new(document, element, kind, delay, duration) {
            std::mem::forget(split);
        }
    }
}

pub struct SplitText {
    element: web::Element,
    original_text: String,
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl SplitText {
    pub fn new(
        document: &web::Document,
        element: web::Element,
        kind: SplitKind,
        delay_ms: u32,
        duration_ms: u32,
    ) -> Option<SplitText> {
        let original_text = element.text_content().unwrap_or_default();
        let segments = kind.split(&original_text);
        if segments.is_empty() {
            log::debug!("[split] empty element skipped");
            return None;
        }

        let spans = build_spans(document, &element, kind, &segments, delay_ms, duration_ms)?;

        let total_ms = stagger_total_ms(segments.len(), delay_ms, duration_ms);
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        reveal(&spans);
                        log::debug!("[split] reveal started, {} ms total", total_ms);
                        observer.disconnect();
                        return;
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let opts = web::IntersectionObserverInit::new();
        opts.set_threshold(&JsValue::from(SPLIT_OBSERVER_THRESHOLD));
        opts.set_root_margin(SPLIT_OBSERVER_MARGIN);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
                .map_err(|e| log::error!("[split] observer creation failed: {:?}", e))
                .ok()?;
        observer.observe(&element);

        Some(SplitText {
            element,
            original_text,
            observer,
            _callback: callback,
        })
    }

    /// Stop observing and restore the original text.
    pub fn revert(&self) {
        self.observer.disconnect();
        self.element.set_text_content(Some(&self.original_text));
    }
}

fn build_spans(
    document: &web::Document,
    element: &web::Element,
    kind: SplitKind,
    segments: &[String],
    delay_ms: u32,
    duration_ms: u32,
) -> Option<Vec<web::HtmlElement>> {
    element.set_text_content(Some(""));
    if let Some(host) = element.dyn_ref::<web::HtmlElement>() {
        dom::set_style(host, "overflow", "hidden");
        dom::set_style(host, "display", "inline-block");
    }

    let mut spans = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        let span: web::HtmlElement = document
            .create_element("span")
            .ok()?
            .dyn_into()
            .ok()?;
        span.set_text_content(Some(segment));
        dom::set_style(&span, "display", "inline-block");
        dom::set_style(&span, "opacity", "0");
        dom::set_style(
            &span,
            "transform",
            &format!("translateY({}px)", SPLIT_FROM_Y_PX),
        );
        dom::set_style(
            &span,
            "transition",
            &format!(
                "transform {duration_ms}ms {EASE_STANDARD}, opacity {duration_ms}ms {EASE_STANDARD}"
            ),
        );
        dom::set_style(
            &span,
            "transition-delay",
            &format!("{}ms", i as u32 * delay_ms),
        );
        dom::set_style(&span, "will-change", "transform, opacity");
        if kind == SplitKind::Words {
            dom::set_style(&span, "margin-right", "0.25em");
        }
        element.append_child(&span).ok()?;
        spans.push(span);

        if kind == SplitKind::Words && i + 1 < segments.len() {
            let space = document.create_text_node(" ");
            element.append_child(&space).ok()?;
        }
    }
    Some(spans)
}

fn reveal(spans: &[web::HtmlElement]) {
    // The per-span transition-delay was staggered at build time, so one
    // style pass starts the whole cascade.
    for span in spans {
        dom::set_style(span, "opacity", "1");
        dom::set_style(span, "transform", "translateY(0px)");
    }
}
