pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod payload;
pub mod state;
pub static FIELD_WGSL: &str = include_str!("../shaders/field.wgsl");

pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use payload::*;
pub use state::*;
