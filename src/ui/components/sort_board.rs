use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::games::sorting::{Bucket, SortEngine};
use crate::ui::theme::Theme;

/// Sorting screen: the pool of unclassified items on top, the two buckets
/// below. `cursor` is a row in the remaining pool.
pub struct SortBoard<'a> {
    pub game: &'a SortEngine,
    pub cursor: usize,
    pub theme: &'a Theme,
}

impl<'a> SortBoard<'a> {
    pub fn new(game: &'a SortEngine, cursor: usize, theme: &'a Theme) -> Self {
        Self { game, cursor, theme }
    }
}

impl Widget for SortBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let counter = format!(
            " Sorted: {} / {} ",
            self.game.len() - self.game.remaining_len(),
            self.game.len()
        );
        let block = Block::bordered()
            .title(" Sort: Safe or Unsafe? ")
            .title_bottom(counter)
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Percentage(50),
                Constraint::Min(0),
            ])
            .split(inner);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Pick an item, then press [s] for Safe or [u] for Unsafe",
            Style::default().fg(colors.text_dim()),
        )))
        .alignment(Alignment::Center);
        hint.render(layout[0], buf);

        let pool_block = Block::bordered()
            .title(" To Sort ")
            .border_style(Style::default().fg(colors.border()));
        let pool_inner = pool_block.inner(layout[1]);
        pool_block.render(layout[1], buf);

        let mut pool_lines = Vec::new();
        for (row, &index) in self.game.remaining().iter().enumerate() {
            let item = &self.game.items()[index];
            let style = if row == self.cursor {
                Style::default()
                    .bg(colors.selected_bg())
                    .fg(colors.selected_fg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            pool_lines.push(Line::from(Span::styled(
                format!(" {} {}", item.emoji, item.label),
                style,
            )));
        }
        Paragraph::new(pool_lines).render(pool_inner, buf);

        let buckets = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[2]);

        self.render_bucket(Bucket::Safe, buckets[0], buf);
        self.render_bucket(Bucket::Unsafe, buckets[1], buf);
    }
}

impl SortBoard<'_> {
    fn render_bucket(&self, bucket: Bucket, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let (title, border) = match bucket {
            Bucket::Safe => (" Safe ✓ ", colors.success()),
            Bucket::Unsafe => (" Unsafe ✗ ", colors.error()),
        };

        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for index in self.game.in_bucket(bucket) {
            let item = &self.game.items()[index];
            // Once placed, show whether the call was right.
            let verdict = if Bucket::for_item(item) == bucket {
                Span::styled(" ✓", Style::default().fg(colors.correct()))
            } else {
                Span::styled(" ✗", Style::default().fg(colors.incorrect()))
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} {}", item.emoji, item.label),
                    Style::default().fg(colors.fg()),
                ),
                verdict,
            ]));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}
