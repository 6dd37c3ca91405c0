#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod form;
mod nav;
mod page;
mod pill_nav;
mod schedule;
mod silk;
mod split_text;
mod stack;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("no window/document; nothing to initialise");
        return Ok(());
    };
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::on_event(&document.into(), "DOMContentLoaded", move |_| init(&doc));
    } else {
        init(&document);
    }
    Ok(())
}

/// Bring up every component present on the page. Each one degrades to an
/// inert no-op when its markup is missing; none of them can take the page
/// down with it.
fn init(document: &web::Document) {
    nav::init(document);
    page::init(document);
    form::init(document);
    pill_nav::init(document);
    split_text::init_all(document);
    stack::init_all(document);
    silk::init_all(document);
}
