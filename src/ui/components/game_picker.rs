use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::games::GameKind;
use crate::ui::theme::Theme;

/// Game chooser: one card per game kind with title, blurb, and difficulty.
pub struct GamePicker<'a> {
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> GamePicker<'a> {
    pub fn new(selected: usize, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }
}

impl Widget for GamePicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Fun Learning Games! ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let subtitle = Paragraph::new(Line::from(Span::styled(
            "Choose a game to test your AI knowledge!",
            Style::default().fg(colors.fg()),
        )))
        .alignment(Alignment::Center);
        subtitle.render(layout[0], buf);

        let cards = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                GameKind::ALL
                    .iter()
                    .map(|_| Constraint::Length(4))
                    .collect::<Vec<_>>(),
            )
            .split(layout[1]);

        for (i, kind) in GameKind::ALL.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };

            let title_style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });

            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {indicator} [{}] {}", i + 1, kind.title()),
                        title_style,
                    ),
                    Span::styled(
                        format!("  ({})", kind.difficulty()),
                        Style::default().fg(colors.warning()),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("      {}", kind.blurb()),
                    Style::default().fg(colors.text_dim()),
                )),
            ];
            Paragraph::new(lines).render(cards[i], buf);
        }
    }
}
