// ANSI styling shared by the grid renderer.

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text, used for the selected block.
pub const STYLE_BOLD: &str = crate::csi!("1m");
