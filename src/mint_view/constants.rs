//! Constants for the mint view
//!
//! Timing and layout values shared by the controller and the components.

// Timing constants
/// Auto-closing toasts are dismissed after this many milliseconds
pub const TOAST_DISMISS_DELAY_MS: u64 = 5000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Ctrl+C prompt shown in the status bar
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// Toast stack
/// Toasts shown at once; older ones wait underneath
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Width of a single toast
pub const TOAST_WIDTH: u16 = 44;

/// Height of a single toast (border + title + description)
pub const TOAST_HEIGHT: u16 = 4;

// Mint card
/// Maximum width of the centered mint card
pub const CARD_MAX_WIDTH: u16 = 64;

/// Height of the mint card
pub const CARD_HEIGHT: u16 = 12;

/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the collection footer
pub const FOOTER_HEIGHT: u16 = 1;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 60;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;
