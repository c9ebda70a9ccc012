use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::ui::theme::Theme;

/// The rules page shown before the first verb.
pub struct Presentation<'a> {
    questions: usize,
    time_limit_secs: u64,
    theme: &'a Theme,
}

impl<'a> Presentation<'a> {
    pub fn new(questions: usize, time_limit_secs: u64, theme: &'a Theme) -> Self {
        Self {
            questions,
            time_limit_secs,
            theme,
        }
    }

    fn rules(&self) -> Vec<String> {
        let timing = if self.time_limit_secs == 0 {
            "There is no time limit, so take as long as you need.".to_string()
        } else {
            format!(
                "You have {} seconds per verb. When the clock runs out the verb counts as missed.",
                self.time_limit_secs
            )
        };
        vec![
            format!(
                "You will be shown {} strong or irregular German verbs, one at a time, \
                 in the infinitive.",
                self.questions
            ),
            "For each one, type its preterite (e.g. fuhr) and its perfect with the \
             auxiliary (e.g. ist gefahren)."
                .to_string(),
            timing,
            "A correct answer earns one point. A wrong answer keeps your score as it is. \
             Either way the full conjugation is shown before the next verb."
                .to_string(),
            "Your final score out of 20 earns you a grade.".to_string(),
        ]
    }
}

impl Widget for Presentation<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Willkommen ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                "Starke Verben",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
        ];
        for rule in self.rules() {
            lines.push(Line::from(Span::styled(
                rule,
                Style::default().fg(colors.fg()),
            )));
            lines.push(Line::from(""));
        }
        lines.push(
            Line::from(Span::styled(
                "Press Enter to start. Viel Erfolg!",
                Style::default().fg(colors.text_dim()),
            ))
            .alignment(Alignment::Center),
        );

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_mention_time_limit_only_when_enabled() {
        let theme = Theme::default();
        let timed = Presentation::new(20, 40, &theme).rules();
        assert!(timed.iter().any(|r| r.contains("40 seconds")));

        let untimed = Presentation::new(5, 0, &theme).rules();
        assert!(untimed.iter().any(|r| r.contains("no time limit")));
        assert!(untimed[0].contains("5 strong"));
    }
}
