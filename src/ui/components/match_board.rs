use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::games::matching::MatchEngine;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchColumn {
    Terms,
    Definitions,
}

/// Two-column matching board. `def_order` maps display rows of the
/// definition column to canonical definition indices; the engine only ever
/// sees canonical indices.
pub struct MatchBoard<'a> {
    pub game: &'a MatchEngine,
    pub def_order: &'a [usize],
    pub column: MatchColumn,
    pub cursor: usize,
    pub theme: &'a Theme,
}

impl<'a> MatchBoard<'a> {
    pub fn new(
        game: &'a MatchEngine,
        def_order: &'a [usize],
        column: MatchColumn,
        cursor: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            game,
            def_order,
            column,
            cursor,
            theme,
        }
    }
}

impl Widget for MatchBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let counter = format!(
            " Matched: {} / {} ",
            self.game.assigned_count(),
            self.game.len()
        );
        let block = Block::bordered()
            .title(" Match the AI Terms! ")
            .title_bottom(counter)
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Pick a term, then pick its matching definition",
            Style::default().fg(colors.text_dim()),
        )))
        .alignment(Alignment::Center);
        hint.render(layout[0], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(layout[1]);

        self.render_terms(columns[0], buf);
        self.render_definitions(columns[1], buf);
    }
}

impl MatchBoard<'_> {
    fn render_terms(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let focused = self.column == MatchColumn::Terms;

        let block = Block::bordered()
            .title(" AI Terms ")
            .border_style(Style::default().fg(if focused {
                colors.border_focused()
            } else {
                colors.border()
            }));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for (i, pair) in self.game.pairs().iter().enumerate() {
            let assigned = self.game.assignment(i);
            let is_cursor = focused && i == self.cursor;
            let is_selected = self.game.selected_term() == Some(i);

            let (style, marker) = match assigned {
                Some(def) if def == i => (Style::default().fg(colors.correct()), " ✓"),
                Some(_) => (Style::default().fg(colors.incorrect()), " ✗"),
                None if is_selected => (
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                    " ◀",
                ),
                None => (Style::default().fg(colors.fg()), ""),
            };
            let style = if is_cursor {
                style.bg(colors.selected_bg()).fg(colors.selected_fg())
            } else {
                style
            };

            lines.push(Line::from(Span::styled(
                format!(" {} {}{}", pair.emoji, pair.term, marker),
                style,
            )));
            lines.push(Line::from(""));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_definitions(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let focused = self.column == MatchColumn::Definitions;

        let block = Block::bordered()
            .title(" Definitions ")
            .border_style(Style::default().fg(if focused {
                colors.border_focused()
            } else {
                colors.border()
            }));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for (row, &def) in self.def_order.iter().enumerate() {
            let taken = self.game.definition_taken(def);
            let is_cursor = focused && row == self.cursor;

            let style = if taken {
                Style::default().fg(colors.text_dim())
            } else if self.game.selected_term().is_some() {
                Style::default().fg(colors.fg())
            } else {
                Style::default().fg(colors.text_dim())
            };
            let style = if is_cursor {
                style.bg(colors.selected_bg()).fg(colors.selected_fg())
            } else {
                style
            };

            lines.push(Line::from(Span::styled(
                format!(" {}", self.game.pairs()[def].definition),
                style,
            )));
            lines.push(Line::from(""));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}
