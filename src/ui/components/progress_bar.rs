use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

/// Below this fraction of the limit the bar switches to the warning color.
const WARNING_RATIO: f64 = 0.25;

/// Draining bar showing the time left to answer the current verb.
pub struct CountdownBar<'a> {
    remaining: Duration,
    ratio: f64,
    theme: &'a Theme,
}

impl<'a> CountdownBar<'a> {
    pub fn new(remaining: Duration, ratio: f64, theme: &'a Theme) -> Self {
        Self {
            remaining,
            ratio: ratio.clamp(0.0, 1.0),
            theme,
        }
    }
}

impl Widget for CountdownBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Time ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let fill = if self.ratio < WARNING_RATIO {
            colors.warning()
        } else {
            colors.bar_filled()
        };
        let filled_width = (self.ratio * f64::from(inner.width)).round() as u16;

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(fill)
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        // Round up so the label only reaches 0s when the timer fires.
        let secs = self.remaining.as_millis().div_ceil(1000);
        let label = format!("{secs}s");
        let label_x = inner.x + inner.width.saturating_sub(label.len() as u16) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}
