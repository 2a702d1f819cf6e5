use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

/// Star-count progress bar for the kid session: a filled ratio bar with a
/// "n / goal" star readout centered on it.
pub struct StarBar<'a> {
    pub label: String,
    pub stars: u32,
    pub goal: u32,
    pub theme: &'a Theme,
}

impl<'a> StarBar<'a> {
    pub fn new(label: &str, stars: u32, goal: u32, theme: &'a Theme) -> Self {
        Self {
            label: label.to_string(),
            stars,
            goal: goal.max(1),
            theme,
        }
    }

    fn ratio(&self) -> f64 {
        (self.stars as f64 / self.goal as f64).clamp(0.0, 1.0)
    }
}

impl Widget for StarBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_width = (self.ratio() * inner.width as f64) as u16;
        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label = format!("★ {} / {}", self.stars, self.goal);
        let label_x = inner.x + (inner.width.saturating_sub(label.chars().count() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.star()));

        if inner.height > 1 {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Keep learning to collect all stars!",
                Style::default().fg(colors.text_dim()),
            )));
            hint.render(Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);
        }
    }
}
