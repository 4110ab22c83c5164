//! Terminal styles.
use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// Final response header.
pub const HEADER: Style = Style::new().bold();

/// Tool call banners.
pub const TOOL: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

/// Verbose diagnostics (iteration banners, token usage).
pub const DIAG: Style = Style::new().dimmed();
