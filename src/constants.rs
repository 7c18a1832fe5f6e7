/// Page wiring and presentation constants for the web frontend.
///
/// Selectors and class names form the contract with the page markup; the
/// numeric values tune the enhancements and keep magic numbers out of the
/// handlers.
// Background canvas
pub const CANVAS_ID: &str = "webgl-canvas";

// Custom cursor
pub const CURSOR_SELECTOR: &str = ".cursor";
pub const HOVER_TARGET_SELECTOR: &str = ".hover-target";
pub const CURSOR_ACTIVE_CLASS: &str = "active";

// Floating chatbot launcher
pub const CHATBOT_ID: &str = "aiChatbot";
pub const CHATBOT_VISIBLE_CLASS: &str = "visible";
pub const CHATBOT_SCROLL_THRESHOLD: f64 = 0.5; // fraction of the viewport height
pub const CHATBOT_HOVER_SCALE: f64 = 1.05;
pub const CHATBOT_REST_SCALE: f64 = 1.0;
pub const CHATBOT_TRANSITION: &str = "transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1)";

// Mega menu
pub const DROPDOWN_ITEM_SELECTOR: &str = "nav li.has-dropdown";
pub const MEGA_MENU_SELECTOR: &str = ".mega-menu";
pub const ARROW_X_PROPERTY: &str = "--arrow-x";

// Frame statistics
pub const STATS_LOG_INTERVAL_SEC: f32 = 5.0;
