//! Application state module

mod app_state;
mod descriptor;
mod editor;
mod forms;
mod preview;
mod store;

pub use app_state::*;
pub use descriptor::*;
pub use editor::*;
pub use forms::*;
pub use preview::*;
pub use store::*;
