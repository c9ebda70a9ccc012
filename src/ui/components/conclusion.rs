use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use verbdrill::engine::{Grade, MAX_SCORE};

use crate::ui::theme::Theme;

pub struct ConclusionCard<'a> {
    score: u32,
    grade: Grade,
    theme: &'a Theme,
}

impl<'a> ConclusionCard<'a> {
    pub fn new(score: u32, grade: Grade, theme: &'a Theme) -> Self {
        Self {
            score,
            grade,
            theme,
        }
    }
}

impl Widget for ConclusionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Ende ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                format!("Score: {} / {MAX_SCORE}", self.score),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Grade: {}", self.grade.name()),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.grade.message(),
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Bis zum nächsten Mal!",
                Style::default().fg(colors.text_dim()),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
