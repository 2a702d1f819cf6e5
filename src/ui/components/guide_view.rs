use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::learn::GuideBrowser;
use crate::ui::theme::Theme;

/// Adult-mode reference browser: section tabs on top, topic list on the
/// left, topic body on the right.
pub struct GuideView<'a> {
    pub browser: &'a GuideBrowser,
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl<'a> GuideView<'a> {
    pub fn new(browser: &'a GuideBrowser, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            browser,
            scroll,
            theme,
        }
    }
}

impl Widget for GuideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let section = self.browser.section();

        let block = Block::bordered()
            .title(" Parent & Educator Guide ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let mut tabs = Vec::new();
        for (i, s) in self.browser.sections().iter().enumerate() {
            let is_current = i == self.browser.section_index();
            let style = if is_current {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_dim())
            };
            tabs.push(Span::styled(format!(" [{}] {} ", i + 1, s.title), style));
        }
        Paragraph::new(Line::from(tabs)).render(layout[0], buf);

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", section.tagline),
            Style::default().fg(colors.text_dim()),
        )))
        .render(layout[1], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(layout[2]);

        let list_block = Block::bordered()
            .title(" Topics ")
            .border_style(Style::default().fg(colors.border()));
        let list_inner = list_block.inner(columns[0]);
        list_block.render(columns[0], buf);

        let mut list_lines = Vec::new();
        for (i, topic) in section.topics.iter().enumerate() {
            let is_current = i == self.browser.topic_index();
            let indicator = if is_current { ">" } else { " " };
            let style = if is_current {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            list_lines.push(Line::from(Span::styled(
                format!(" {indicator} {} {}", topic.emoji, topic.title),
                style,
            )));
        }
        Paragraph::new(list_lines).render(list_inner, buf);

        let topic = self.browser.topic();
        let body_block = Block::bordered()
            .title(format!(" {} ", topic.title))
            .border_style(Style::default().fg(colors.border()));
        let body_inner = body_block.inner(columns[1]);
        body_block.render(columns[1], buf);

        let mut body_lines = vec![
            Line::from(Span::styled(
                topic.body.clone(),
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
        ];
        for point in &topic.points {
            body_lines.push(Line::from(Span::styled(
                format!("  • {point}"),
                Style::default().fg(colors.text_dim()),
            )));
        }
        Paragraph::new(body_lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(body_inner, buf);
    }
}
