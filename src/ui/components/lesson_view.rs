use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::learn::LessonBrowser;
use crate::ui::theme::Theme;

/// Lesson reader: tab strip of all lessons (completed ones get a check),
/// then the current lesson's sections and its try-it-yourself box.
pub struct LessonView<'a> {
    pub browser: &'a LessonBrowser,
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl<'a> LessonView<'a> {
    pub fn new(browser: &'a LessonBrowser, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            browser,
            scroll,
            theme,
        }
    }
}

impl Widget for LessonView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lesson = self.browser.lesson();

        let progress = format!(
            " {} / {} complete ",
            self.browser.completed_count(),
            self.browser.len()
        );
        let block = Block::bordered()
            .title(format!(" {} {} ", lesson.emoji, lesson.title))
            .title_bottom(progress)
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        // Tab strip
        let mut tabs = Vec::new();
        for (i, l) in self.browser.lessons().iter().enumerate() {
            let is_current = i == self.browser.current();
            let mark = if self.browser.is_completed(i) { "✓" } else { " " };
            let style = if is_current {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else if self.browser.is_completed(i) {
                Style::default().fg(colors.success())
            } else {
                Style::default().fg(colors.text_dim())
            };
            tabs.push(Span::styled(format!(" {mark}{} ", l.title), style));
            tabs.push(Span::raw("|"));
        }
        tabs.pop();
        Paragraph::new(Line::from(tabs)).render(layout[0], buf);

        // Lesson body
        let mut lines = vec![
            Line::from(Span::styled(
                lesson.intro.clone(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for section in &lesson.sections {
            lines.push(Line::from(Span::styled(
                format!("{} {}", section.emoji, section.heading),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                section.text.clone(),
                Style::default().fg(colors.fg()),
            )));
            if let Some(example) = &section.example {
                lines.push(Line::from(vec![
                    Span::styled("  Example: ", Style::default().fg(colors.accent_dim())),
                    Span::styled(example.clone(), Style::default().fg(colors.text_dim())),
                ]));
            }
            lines.push(Line::from(""));
        }
        if let Some(try_it) = &lesson.try_it {
            lines.push(Line::from(Span::styled(
                "✨ Try It Yourself!",
                Style::default().fg(colors.star()).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                try_it.prompt.clone(),
                Style::default().fg(colors.fg()),
            )));
            lines.push(Line::from(Span::styled(
                try_it.activity.clone(),
                Style::default().fg(colors.text_dim()),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(layout[1], buf);
    }
}
