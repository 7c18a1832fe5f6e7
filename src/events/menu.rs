use crate::constants::{ARROW_X_PROPERTY, DROPDOWN_ITEM_SELECTOR, MEGA_MENU_SELECTOR};
use crate::dom;
use crate::layout;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Point every mega-menu arrow at the center of its nav button, on hover and
/// again on resize for menus that are currently shown.
pub fn wire_mega_menus(document: &web::Document) {
    let menus: Vec<(web::Element, web::HtmlElement)> =
        dom::query_all(document, DROPDOWN_ITEM_SELECTOR)
            .into_iter()
            .filter_map(|item| {
                let menu = item
                    .query_selector(MEGA_MENU_SELECTOR)
                    .ok()
                    .flatten()?
                    .dyn_into::<web::HtmlElement>()
                    .ok()?;
                Some((item, menu))
            })
            .collect();
    if menus.is_empty() {
        return;
    }

    for (item, menu) in &menus {
        let (item_hover, menu_hover) = (item.clone(), menu.clone());
        dom::add_listener(item, "mouseenter", move || {
            align_arrow(&item_hover, &menu_hover);
        });
    }
    log::info!("[menu] wired {} mega menus", menus.len());

    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    dom::add_listener(&window, "resize", move || {
        for (item, menu) in &menus {
            if is_open(&win, menu) {
                align_arrow(item, menu);
            }
        }
    });
}

fn is_open(window: &web::Window, menu: &web::HtmlElement) -> bool {
    window
        .get_computed_style(menu)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("opacity").ok())
        .map(|opacity| layout::menu_is_open(&opacity))
        .unwrap_or(false)
}

fn align_arrow(item: &web::Element, menu: &web::HtmlElement) {
    let button = item.get_bounding_client_rect();
    let menu_rect = menu.get_bounding_client_rect();
    let x = layout::arrow_offset_px(button.left(), button.width(), menu_rect.left());
    _ = menu.style().set_property(ARROW_X_PROPERTY, &layout::px(x));
}
