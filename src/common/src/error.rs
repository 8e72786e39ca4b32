//! System-wide error types for TestOS.

use core::fmt;

/// Console configuration errors.
///
/// Raised when a menu table cannot be laid out on the text grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigError {
    /// The main menu has no options
    EmptyMainMenu,
    /// The change-value menu is reachable but has no options
    EmptyValueMenu,
    /// More options than rows left below the banner
    MenuTooTall {
        /// Number of options requested.
        options: usize,
        /// Rows available for them.
        rows: usize,
    },
    /// A label does not fit on one row
    LabelTooWide,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyMainMenu => write!(f, "main menu has no options"),
            ConfigError::EmptyValueMenu => write!(f, "change-value menu has no options"),
            ConfigError::MenuTooTall { options, rows } => {
                write!(f, "{} menu options do not fit in {} rows", options, rows)
            }
            ConfigError::LabelTooWide => write!(f, "menu label wider than the screen"),
        }
    }
}
