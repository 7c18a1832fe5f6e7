// Pure layout math behind the page enhancements. Kept free of web APIs so
// host tests can include it directly.

/// Horizontal offset of a mega-menu arrow so it points at the center of the
/// hovered nav button, relative to the menu's left edge.
#[inline]
pub fn arrow_offset_px(button_left: f64, button_width: f64, menu_left: f64) -> f64 {
    let button_center = button_left + button_width / 2.0;
    button_center - menu_left
}

/// The chatbot launcher shows once the page is scrolled past a fraction of
/// the viewport height.
#[inline]
pub fn chatbot_visible(scroll_y: f64, viewport_height: f64, threshold: f64) -> bool {
    scroll_y > viewport_height * threshold
}

/// Menus hidden by the stylesheet report a computed opacity of exactly "0".
#[inline]
pub fn menu_is_open(computed_opacity: &str) -> bool {
    computed_opacity.trim() != "0"
}

#[inline]
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

#[inline]
pub fn scale_transform(scale: f64) -> String {
    format!("scale({})", scale)
}
