//! Shared rendering helpers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centered sub-rectangle sized as a percentage of `area`, used for
/// modal overlays.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Format a won amount with thousands separators, e.g. `12,900원`.
#[must_use]
pub fn fmt_price(amount: Option<u64>) -> String {
    match amount {
        None => "가격정보 없음".to_owned(),
        Some(v) => {
            let digits = v.to_string();
            let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i).is_multiple_of(3) {
                    out.push(',');
                }
                out.push(ch);
            }
            out.push('원');
            out
        }
    }
}
