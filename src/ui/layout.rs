use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header bar, page body and a key-hint footer. Every page shares it.
pub struct PageLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl PageLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            body: vertical[1],
            footer: vertical[2],
        }
    }
}

/// A card of the given size centered in `area`, shrunk to fit when the
/// terminal is smaller than the card.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let left = area.x.saturating_add(area.width.saturating_sub(w) / 2);
    let top = area.y.saturating_add(area.height.saturating_sub(h) / 2);
    Rect::new(left, top, w, h)
}

/// Join key hints into a single footer line, dropping the ones that do not
/// fit in `width`.
pub fn hint_line(hints: &[&str], width: usize) -> String {
    let mut line = String::from(" ");
    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let extra = if line.len() > 1 { 2 } else { 0 } + hint.chars().count();
        if line.chars().count() + extra > width {
            break;
        }
        if line.len() > 1 {
            line.push_str("  ");
        }
        line.push_str(hint);
    }
    line
}
