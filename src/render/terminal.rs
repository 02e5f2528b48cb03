//! Terminal width detection

use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};
use tracing::debug;

/// Width used when stdout is not a terminal or its size is unknown
pub const DEFAULT_WIDTH: usize = 80;

/// Output width for stdout
///
/// Asks the terminal for its size, then falls back to `COLUMNS` and finally
/// the default width. Redirected output always uses the default width.
pub fn detect_width() -> usize {
    if !std::io::stdout().is_terminal() {
        debug!("stdout is not a terminal, using default width {}", DEFAULT_WIDTH);
        return DEFAULT_WIDTH;
    }
    let reported = terminal_size().map(|(Width(w), _)| w);
    let width = pick_width(reported, std::env::var("COLUMNS").ok().as_deref());
    debug!("Terminal width: {}", width);
    width
}

/// Choose between the size reported by the terminal and `COLUMNS`
pub fn pick_width(reported: Option<u16>, columns: Option<&str>) -> usize {
    match reported {
        Some(w) if w > 0 => usize::from(w),
        _ => width_from_columns(columns),
    }
}

/// Parse a `COLUMNS` value, falling back to the default width
pub fn width_from_columns(columns: Option<&str>) -> usize {
    match columns.and_then(|c| c.trim().parse::<usize>().ok()) {
        Some(width) if width > 0 => width,
        _ => {
            debug!("Couldn't get terminal width, using default width {}", DEFAULT_WIDTH);
            DEFAULT_WIDTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_from_columns() {
        assert_eq!(width_from_columns(Some("120")), 120);
        assert_eq!(width_from_columns(Some(" 100 ")), 100);
        assert_eq!(width_from_columns(Some("0")), DEFAULT_WIDTH);
        assert_eq!(width_from_columns(Some("wide")), DEFAULT_WIDTH);
        assert_eq!(width_from_columns(None), DEFAULT_WIDTH);
    }

    #[test]
    fn test_reported_size_wins_over_columns() {
        assert_eq!(pick_width(Some(132), Some("100")), 132);
        assert_eq!(pick_width(Some(132), None), 132);
    }

    #[test]
    fn test_columns_used_when_size_unknown() {
        assert_eq!(pick_width(None, Some("100")), 100);
        assert_eq!(pick_width(Some(0), Some("90")), 90);
        assert_eq!(pick_width(None, None), DEFAULT_WIDTH);
    }
}
