use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::games::quiz::{QuizEngine, QuizPhase};
use crate::ui::theme::Theme;

/// The live quiz screen: prompt, the four options with the cursor, and the
/// reveal (check marks plus explanation) after an answer is locked in.
pub struct QuizPanel<'a> {
    pub quiz: &'a QuizEngine,
    pub cursor: usize,
    pub theme: &'a Theme,
}

impl<'a> QuizPanel<'a> {
    pub fn new(quiz: &'a QuizEngine, cursor: usize, theme: &'a Theme) -> Self {
        Self { quiz, cursor, theme }
    }
}

impl Widget for QuizPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let question = self.quiz.question();
        let revealing = self.quiz.phase() == QuizPhase::Revealing;

        let counter = format!(
            " Question {} of {} ",
            self.quiz.current_index() + 1,
            self.quiz.len()
        );
        let block = Block::bordered()
            .title(counter)
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let option_rows = question.options.len() as u16 * 2;
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(option_rows),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let prompt = Paragraph::new(vec![
            Line::from(Span::styled(
                question.emoji.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                question.prompt.clone(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        prompt.render(layout[0], buf);

        let option_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                question
                    .options
                    .iter()
                    .map(|_| Constraint::Length(2))
                    .collect::<Vec<_>>(),
            )
            .split(layout[1]);

        for (i, option) in question.options.iter().enumerate() {
            let is_cursor = i == self.cursor && !revealing;
            let is_correct = i == question.correct;
            let is_picked = self.quiz.selected() == Some(i);

            let (fg, bg) = if revealing && is_correct {
                (colors.correct(), Some(colors.correct_bg()))
            } else if revealing && is_picked {
                (colors.incorrect(), Some(colors.incorrect_bg()))
            } else if revealing {
                (colors.text_dim(), None)
            } else if is_cursor {
                (colors.selected_fg(), Some(colors.selected_bg()))
            } else {
                (colors.fg(), None)
            };

            let marker = if revealing && is_correct {
                " ✓"
            } else if revealing && is_picked {
                " ✗"
            } else {
                ""
            };
            let text = format!(" [{}] {}{}", i + 1, option, marker);

            let mut style = Style::default().fg(fg);
            if let Some(bg) = bg {
                style = style.bg(bg);
            }
            if is_cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            Paragraph::new(Line::from(Span::styled(text, style))).render(option_layout[i], buf);
        }

        if revealing {
            let explanation = Paragraph::new(Line::from(vec![
                Span::styled("💡 ", Style::default().fg(colors.accent())),
                Span::styled(
                    question.explanation.clone(),
                    Style::default().fg(colors.fg()),
                ),
            ]))
            .wrap(Wrap { trim: true });
            explanation.render(layout[2], buf);
        }

        let score_text = format!(
            " Score: {} / {} ",
            self.quiz.score(),
            match self.quiz.phase() {
                QuizPhase::Answering => self.quiz.current_index(),
                QuizPhase::Revealing => self.quiz.current_index() + 1,
                QuizPhase::Complete => self.quiz.len(),
            }
        );
        Paragraph::new(Line::from(Span::styled(
            score_text,
            Style::default().fg(colors.text_dim()),
        )))
        .render(layout[3], buf);
    }
}
