use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "iprange::print";

/// Emits a raw output line through the subscriber.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let dash_count: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(formatted.as_str()));
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );

    print(&line);
}

pub fn key_value(key: &str, value: ColoredString) {
    print(&format!("{:<10} {}", key.bright_black(), value));
}

pub fn summary(msg: &str, q_level: u8) {
    if q_level > 1 {
        return;
    }

    print(&"═".repeat(TOTAL_WIDTH).bright_black().to_string());
    print(msg);
}
