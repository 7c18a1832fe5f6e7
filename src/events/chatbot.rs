use crate::constants::{
    CHATBOT_HOVER_SCALE, CHATBOT_ID, CHATBOT_REST_SCALE, CHATBOT_SCROLL_THRESHOLD,
    CHATBOT_TRANSITION, CHATBOT_VISIBLE_CLASS,
};
use crate::dom;
use crate::layout;
use web_sys as web;

/// Floating chatbot launcher: revealed after scrolling half a viewport,
/// slightly enlarged while hovered. The element is optional.
pub fn wire_chatbot(document: &web::Document) {
    let Some(chatbot) = document.get_element_by_id(CHATBOT_ID) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };

    let on_scroll = chatbot.clone();
    let win = window.clone();
    dom::add_listener(&window, "scroll", move || {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let height = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let cl = on_scroll.class_list();
        if layout::chatbot_visible(scroll_y, height, CHATBOT_SCROLL_THRESHOLD) {
            _ = cl.add_1(CHATBOT_VISIBLE_CLASS);
        } else {
            _ = cl.remove_1(CHATBOT_VISIBLE_CLASS);
        }
    });

    if let Some(el) = dom::html_element(&chatbot) {
        _ = el.style().set_property("transition", CHATBOT_TRANSITION);
        for (event, scale) in [
            ("mouseenter", CHATBOT_HOVER_SCALE),
            ("mouseleave", CHATBOT_REST_SCALE),
        ] {
            let el = el.clone();
            dom::add_listener(&chatbot, event, move || {
                _ = el
                    .style()
                    .set_property("transform", &layout::scale_transform(scale));
            });
        }
    }
    log::info!("[chatbot] wired #{}", CHATBOT_ID);
}
