//! Dialog form rendering

mod field_renderer;
mod property_form;

pub use field_renderer::draw_field;
pub use property_form::draw as draw_property_form;
