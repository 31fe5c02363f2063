pub mod render;
pub mod styles;
pub mod templates;
