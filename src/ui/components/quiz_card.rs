use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::text_field::TextField;
use crate::ui::theme::Theme;

/// Which answer field receives typed keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerField {
    Preterite,
    Perfect,
}

impl AnswerField {
    pub fn other(self) -> Self {
        match self {
            AnswerField::Preterite => AnswerField::Perfect,
            AnswerField::Perfect => AnswerField::Preterite,
        }
    }
}

/// The question page: the infinitive to conjugate plus both answer fields.
pub struct QuizCard<'a> {
    infinitive: &'a str,
    preterite: &'a TextField,
    perfect: &'a TextField,
    focus: AnswerField,
    theme: &'a Theme,
}

impl<'a> QuizCard<'a> {
    pub fn new(
        infinitive: &'a str,
        preterite: &'a TextField,
        perfect: &'a TextField,
        focus: AnswerField,
        theme: &'a Theme,
    ) -> Self {
        Self {
            infinitive,
            preterite,
            perfect,
            focus,
            theme,
        }
    }

    fn render_field(
        &self,
        title: &str,
        field: &TextField,
        focused: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let colors = &self.theme.colors;
        let border = if focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(format!(" {title} "))
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.input_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let text_style = Style::default().fg(colors.fg());
        let (before, at, after) = field.render_parts();
        let mut spans = vec![Span::styled(before.to_string(), text_style)];
        if focused {
            let cursor_style = Style::default().fg(colors.bg()).bg(colors.fg());
            let under = at.map_or_else(|| " ".to_string(), |c| c.to_string());
            spans.push(Span::styled(under, cursor_style));
        } else if let Some(c) = at {
            spans.push(Span::styled(c.to_string(), text_style));
        }
        spans.push(Span::styled(after.to_string(), text_style));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

impl Widget for QuizCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        Paragraph::new(Line::from(Span::styled(
            "Infinitiv",
            Style::default().fg(colors.text_dim()),
        )))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        Paragraph::new(Line::from(Span::styled(
            self.infinitive.to_string(),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(colors.accent())))
        .render(rows[1], buf);

        self.render_field(
            "Präteritum",
            self.preterite,
            self.focus == AnswerField::Preterite,
            rows[3],
            buf,
        );
        self.render_field(
            "Perfekt",
            self.perfect,
            self.focus == AnswerField::Perfect,
            rows[4],
            buf,
        );
    }
}
