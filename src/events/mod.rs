pub mod chatbot;
pub mod cursor;
pub mod menu;

pub use chatbot::wire_chatbot;
pub use cursor::wire_cursor;
pub use menu::wire_mega_menus;
