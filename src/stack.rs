//! DOM adapter for the stacking engine: container discovery, declarative
//! configuration, per-tick scroll sampling and change-gated style writes.

use crate::core::stack::{
    CompletionEdge, ItemUpdate, LayoutSample, Length, StackConfig, StackEngine,
};
use crate::dom;
use crate::schedule::FrameCoalescer;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

const CONTAINER_SELECTOR: &str = "[data-scroll-stack]";
const ITEM_SELECTOR: &str = ".scroll-stack-card";
const END_SELECTOR: &str = ".scroll-stack-end";

/// Instantiate an engine for every tagged container on the page. Instances
/// are page-lifetime; they are intentionally leaked.
pub fn init_all(document: &web::Document) {
    for container in dom::select_all(document, CONTAINER_SELECTOR) {
        let config = config_from_attrs(&container);
        if let Some(stack) = ScrollStack::new(container, config, None) {
            std::mem::forget(stack);
        }
    }
}

/// Imperative entry point: resolve the container by selector. Logs and
/// returns `None` (inert) when it cannot be resolved.
pub fn attach(
    document: &web::Document,
    selector: &str,
    config: StackConfig,
    on_complete: Option<Box<dyn Fn()>>,
) -> Option<ScrollStack> {
    match document.query_selector(selector) {
        Ok(Some(el)) => ScrollStack::new(el, config, on_complete),
        _ => {
            log::error!("[stack] container {:?} not found", selector);
            None
        }
    }
}

pub struct ScrollStack {
    inner: Rc<Inner>,
}

struct Inner {
    container: web::Element,
    items: Vec<web::HtmlElement>,
    end_marker: Option<web::Element>,
    engine: RefCell<StackEngine>,
    sample: RefCell<LayoutSample>,
    updates: RefCell<Vec<ItemUpdate>>,
    on_complete: Option<Box<dyn Fn()>>,
    busy: Cell<bool>,
    destroyed: Cell<bool>,
    coalescer: FrameCoalescer,
    listeners: RefCell<Vec<dom::ListenerHandle>>,
}

impl ScrollStack {
    pub fn new(
        container: web::Element,
        config: StackConfig,
        on_complete: Option<Box<dyn Fn()>>,
    ) -> Option<ScrollStack> {
        let items: Vec<web::HtmlElement> = dom::select_in(&container, ITEM_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();
        if items.is_empty() {
            log::warn!(
                "[stack] no {} items in container; staying inert",
                ITEM_SELECTOR
            );
            return None;
        }
        let end_marker = container.query_selector(END_SELECTOR).ok().flatten();

        prime_items(&items, &config);

        let engine = StackEngine::new(config.clone(), items.len());
        let inner = Rc::new_cyclic(|weak: &Weak<Inner>| {
            let weak_tick = weak.clone();
            Inner {
                container,
                items,
                end_marker,
                engine: RefCell::new(engine),
                sample: RefCell::new(LayoutSample::default()),
                updates: RefCell::new(Vec::new()),
                on_complete,
                busy: Cell::new(false),
                destroyed: Cell::new(false),
                coalescer: FrameCoalescer::new(move || {
                    if let Some(inner) = weak_tick.upgrade() {
                        inner.update();
                    }
                }),
                listeners: RefCell::new(Vec::new()),
            }
        });

        inner.wire(config.use_window_scroll);
        log::info!(
            "[stack] engine attached: {} items, window_scroll={}",
            inner.engine.borrow().item_count(),
            config.use_window_scroll
        );
        // First pass before anything scrolls, so resting transforms land.
        inner.coalescer.request();
        Some(ScrollStack { inner })
    }

    /// Release the tick subscription and all snapshot records. Safe to call
    /// more than once; the container simply stays static afterwards.
    pub fn destroy(&self) {
        if self.inner.destroyed.replace(true) {
            return;
        }
        self.inner.listeners.borrow_mut().clear();
        self.inner.coalescer.cancel();
        self.inner.engine.borrow_mut().reset();
        log::debug!("[stack] engine destroyed");
    }
}

impl Inner {
    fn wire(&self, use_window_scroll: bool) {
        let Some(window) = web::window() else {
            return;
        };
        let window_target: web::EventTarget = window.into();
        let scroll_target: web::EventTarget = if use_window_scroll {
            window_target.clone()
        } else {
            self.container.clone().into()
        };

        let mut handles = self.listeners.borrow_mut();
        let coalescer = self.coalescer.clone();
        handles.extend(dom::ListenerHandle::attach_passive(
            &scroll_target,
            "scroll",
            move |_| coalescer.request(),
        ));
        // Percentage thresholds resolve against the live extent, so a resize
        // must recompute as well.
        let coalescer = self.coalescer.clone();
        handles.extend(dom::ListenerHandle::attach(
            &window_target,
            "resize",
            move |_| coalescer.request(),
        ));
    }

    fn update(&self) {
        // Busy flag: a pass that provokes layout-driven scroll/resize events
        // must not recurse into another pass.
        if self.destroyed.get() || self.busy.replace(true) {
            return;
        }
        self.sample_layout();
        let edge = {
            let mut updates = self.updates.borrow_mut();
            updates.clear();
            let edge = self
                .engine
                .borrow_mut()
                .compute(&self.sample.borrow(), &mut updates);
            for update in updates.iter() {
                self.apply(update);
            }
            edge
        };
        if edge == Some(CompletionEdge::Entered) {
            log::debug!("[stack] stack complete");
            if let Some(cb) = &self.on_complete {
                cb();
            }
        }
        self.busy.set(false);
    }

    fn sample_layout(&self) {
        let mut sample = self.sample.borrow_mut();
        sample.item_tops.clear();
        sample.end_marker_top = None;
        let Some(window) = web::window() else {
            sample.extent = 0.0;
            return;
        };
        if self.engine.borrow().config().use_window_scroll {
            sample.offset = dom::window_scroll_y(&window);
            sample.extent = dom::viewport_height(&window);
            for item in &self.items {
                sample
                    .item_tops
                    .push(item.get_bounding_client_rect().top() + sample.offset);
            }
            sample.end_marker_top = self
                .end_marker
                .as_ref()
                .map(|el| el.get_bounding_client_rect().top() + sample.offset);
        } else {
            sample.offset = f64::from(self.container.scroll_top());
            sample.extent = f64::from(self.container.client_height());
            let origin = self.container.get_bounding_client_rect().top();
            for item in &self.items {
                sample
                    .item_tops
                    .push(item.get_bounding_client_rect().top() - origin + sample.offset);
            }
            sample.end_marker_top = self
                .end_marker
                .as_ref()
                .map(|el| el.get_bounding_client_rect().top() - origin + sample.offset);
        }
    }

    fn apply(&self, update: &ItemUpdate) {
        let Some(item) = self.items.get(update.index) else {
            return;
        };
        let t = update.transform;
        let transform = format!(
            "translate3d(0, {}px, 0) scale({}) rotate({}deg)",
            t.translate_y, t.scale, t.rotation
        );
        dom::set_style(item, "transform", &transform);
        let filter = if t.blur > 0.0 {
            format!("blur({}px)", t.blur)
        } else {
            String::new()
        };
        dom::set_style(item, "filter", &filter);
    }
}

fn prime_items(items: &[web::HtmlElement], config: &StackConfig) {
    let last = items.len() - 1;
    for (i, item) in items.iter().enumerate() {
        if i < last {
            dom::set_style(item, "margin-bottom", &format!("{}px", config.item_distance));
        }
        dom::set_style(item, "will-change", "transform, filter");
        dom::set_style(item, "transform-origin", "top center");
    }
}

fn config_from_attrs(el: &web::Element) -> StackConfig {
    let d = StackConfig::default();
    StackConfig {
        item_distance: dom::attr_f64_or(el, "data-item-distance", d.item_distance),
        item_scale: dom::attr_f64_or(el, "data-item-scale", d.item_scale),
        item_stack_distance: dom::attr_f64_or(el, "data-item-stack-distance", d.item_stack_distance),
        stack_position: attr_length_or(el, "data-stack-position", d.stack_position),
        scale_end_position: attr_length_or(el, "data-scale-end-position", d.scale_end_position),
        base_scale: dom::attr_f64_or(el, "data-base-scale", d.base_scale),
        rotation_amount: dom::attr_f64_or(el, "data-rotation-amount", d.rotation_amount),
        blur_amount: dom::attr_f64_or(el, "data-blur-amount", d.blur_amount),
        use_window_scroll: dom::attr_bool_or(el, "data-use-window-scroll", d.use_window_scroll),
    }
}

fn attr_length_or(el: &web::Element, name: &str, default: Length) -> Length {
    match el.get_attribute(name) {
        Some(raw) => Length::parse(&raw).unwrap_or_else(|| {
            log::warn!("[config] bad {}=\"{}\"; using {:?}", name, raw, default);
            default
        }),
        None => default,
    }
}
