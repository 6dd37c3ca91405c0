//! Coalesced scheduling: bursts of scroll/resize notifications collapse into
//! at most one queued animation-frame callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Inner {
    pending: Cell<bool>,
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// A "run before next paint" primitive with a single pending slot.
/// `request` while a tick is queued reuses the queued tick; duplicate
/// notifications coalesce naturally instead of stacking.
#[derive(Clone)]
pub struct FrameCoalescer {
    inner: Rc<Inner>,
}

impl FrameCoalescer {
    pub fn new(mut on_tick: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(Inner {
            pending: Cell::new(false),
            raf_id: Cell::new(None),
            tick: RefCell::new(None),
        });
        let inner_tick = inner.clone();
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner_tick.pending.set(false);
            inner_tick.raf_id.set(None);
            on_tick();
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    /// Schedule a tick before the next paint unless one is already queued.
    pub fn request(&self) {
        if self.inner.pending.replace(true) {
            return;
        }
        let Some(window) = web::window() else {
            self.inner.pending.set(false);
            return;
        };
        let tick = self.inner.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            self.inner.pending.set(false);
            return;
        };
        match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.inner.raf_id.set(Some(id)),
            Err(e) => {
                log::error!("[schedule] requestAnimationFrame failed: {:?}", e);
                self.inner.pending.set(false);
            }
        }
    }

    /// Drop any queued tick. Later `request` calls still work.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
        self.inner.pending.set(false);
    }
}
