//! Dialog components for TUI

mod base;
mod error_dialog;
mod info_dialog;
mod prompt_dialog;

pub use base::centered_rect;
pub use error_dialog::render_error_dialog;
pub use info_dialog::render_info_dialog;
pub use prompt_dialog::render_prompt_dialog;
