use crate::constants::{CURSOR_ACTIVE_CLASS, CURSOR_SELECTOR, HOVER_TARGET_SELECTOR};
use crate::dom;
use crate::layout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Custom cursor: the `.cursor` element follows the pointer and switches to
/// its active look over hover targets.
pub fn wire_cursor(document: &web::Document) {
    let cursor = document
        .query_selector(CURSOR_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let Some(cursor) = cursor else {
        log::debug!("[cursor] no {} element, skipping", CURSOR_SELECTOR);
        return;
    };
    wire_follow(document, &cursor);
    let targets = wire_hover_targets(document, &cursor);
    log::info!("[cursor] wired with {} hover targets", targets);
}

fn wire_follow(document: &web::Document, cursor: &web::HtmlElement) {
    let cursor = cursor.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let style = cursor.style();
        _ = style.set_property("left", &layout::px(ev.client_x() as f64));
        _ = style.set_property("top", &layout::px(ev.client_y() as f64));
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_hover_targets(document: &web::Document, cursor: &web::HtmlElement) -> usize {
    let targets = dom::query_all(document, HOVER_TARGET_SELECTOR);
    for target in &targets {
        let on_enter = cursor.clone();
        dom::add_listener(target, "mouseenter", move || {
            _ = on_enter.class_list().add_1(CURSOR_ACTIVE_CLASS);
        });
        let on_leave = cursor.clone();
        dom::add_listener(target, "mouseleave", move || {
            _ = on_leave.class_list().remove_1(CURSOR_ACTIVE_CLASS);
        });
    }
    targets.len()
}
