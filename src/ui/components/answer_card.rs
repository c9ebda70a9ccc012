use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use verbdrill::words::VerbRecord;

use crate::ui::theme::Theme;

/// Verdict for the last verb plus its full conjugation.
pub struct AnswerCard<'a> {
    verb: &'a VerbRecord,
    correct: bool,
    theme: &'a Theme,
}

impl<'a> AnswerCard<'a> {
    pub fn new(verb: &'a VerbRecord, correct: bool, theme: &'a Theme) -> Self {
        Self {
            verb,
            correct,
            theme,
        }
    }
}

impl Widget for AnswerCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let (title, verdict, color) = if self.correct {
            (" Richtig ", "Right answer, well done!", colors.success())
        } else {
            (" Falsch ", "Not quite. Here is the full conjugation:", colors.error())
        };

        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let label = Style::default().fg(colors.text_dim());
        let value = Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD);
        let row = |name: &'static str, text: &str| {
            Line::from(vec![
                Span::styled(format!("{name:<14}"), label),
                Span::styled(text.to_string(), value),
            ])
        };

        let lines = vec![
            Line::from(Span::styled(verdict, Style::default().fg(color)))
                .alignment(Alignment::Center),
            Line::from(""),
            row("Infinitiv", &self.verb.infinitive),
            row("3. Person", &self.verb.third_person),
            row("Präteritum", &self.verb.preterite),
            row("Perfekt", &self.verb.perfect),
            row("Niveau", self.verb.level.as_str()),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
