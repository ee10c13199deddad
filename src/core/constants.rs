//! Shared constants used across the application

use std::time::Duration;

/// Terminal widths below this are laid out as a single column with the
/// sidebar as an overlay; at or above it the sidebar is a fixed left pane.
pub const NARROW_LAYOUT_THRESHOLD: u16 = 100;

/// Column width of the sidebar pane (and of the narrow-mode overlay).
pub const SIDEBAR_WIDTH: u16 = 32;

/// Composer height bounds, in text rows. The composer starts at the minimum
/// and grows with the draft, never past the maximum.
pub const COMPOSER_MIN_ROWS: u16 = 1;
pub const COMPOSER_MAX_ROWS: u16 = 6;

/// How long a transient status note stays on screen.
pub const STATUS_TTL: Duration = Duration::from_secs(5);

/// Event poll timeout for the interactive loop.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);
