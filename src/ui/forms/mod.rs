//! Form rendering module

mod field_renderer;
mod register_form;

pub use register_form::{draw as draw_register, sections as register_sections};
