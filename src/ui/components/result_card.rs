use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::games::GameKind;
use crate::ui::theme::Theme;

/// End-of-game card: score readout, star banner when earned, retry hints.
pub struct ResultCard<'a> {
    pub game: GameKind,
    pub correct: usize,
    pub total: usize,
    pub rewarded: bool,
    pub theme: &'a Theme,
}

impl<'a> ResultCard<'a> {
    pub fn new(
        game: GameKind,
        correct: usize,
        total: usize,
        rewarded: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            game,
            correct,
            total,
            rewarded,
            theme,
        }
    }
}

impl Widget for ResultCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let title = match self.game {
            GameKind::Quiz => " Quiz Complete! ",
            GameKind::Match => " Matching Complete! ",
            GameKind::Sort => " Sorting Complete! ",
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        let trophy = Paragraph::new(Line::from(Span::styled(
            "🏆",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        trophy.render(layout[0], buf);

        let score_text = format!("You got {} out of {} correct!", self.correct, self.total);
        let score = Paragraph::new(Line::from(Span::styled(
            score_text,
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        score.render(layout[1], buf);

        let banner = if self.rewarded {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "★",
                    Style::default().fg(colors.star()).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Awesome! You earned a star!",
                    Style::default().fg(colors.success()),
                )),
            ])
        } else {
            Paragraph::new(Line::from(Span::styled(
                "Good try! Play again to earn a star!",
                Style::default().fg(colors.text_dim()),
            )))
        };
        banner.alignment(Alignment::Center).render(layout[2], buf);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("  [r] Play again  ", Style::default().fg(colors.accent())),
            Span::styled("[q/Esc] Back to games", Style::default().fg(colors.accent())),
        ]))
        .alignment(Alignment::Center);
        help.render(layout[4], buf);
    }
}
