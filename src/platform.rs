//! Keyboard shortcut labels shown in hints

/// Save shortcut display for dialogs and the preview submit hint.
/// Ctrl+S works on all platforms.
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Copy configuration JSON to the clipboard
pub const COPY_SHORTCUT: &str = "y";

pub const EXPORT_SHORTCUT: &str = "^E";
pub const IMPORT_SHORTCUT: &str = "^O";
pub const PREVIEW_SHORTCUT: &str = "^P";
