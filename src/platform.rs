//! Platform-specific configuration

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Theme toggle shortcut display
pub const THEME_SHORTCUT: &str = "^T";
