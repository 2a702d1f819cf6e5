use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::learn::SafetyBrowser;
use crate::ui::theme::Theme;

/// Safety topic reader: topic tabs, the rules and do/don't lists, and the
/// quick-check question with its one-shot answer state.
pub struct SafetyView<'a> {
    pub browser: &'a SafetyBrowser,
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl<'a> SafetyView<'a> {
    pub fn new(browser: &'a SafetyBrowser, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            browser,
            scroll,
            theme,
        }
    }
}

impl Widget for SafetyView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let topic = self.browser.topic();

        let block = Block::bordered()
            .title(format!(" {} {} ", topic.emoji, topic.title))
            .title_bottom(" Safety First! ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        // Topic tabs; answered topics show how the quick-check went.
        let mut tabs = Vec::new();
        for (i, t) in self.browser.topics().iter().enumerate() {
            let is_current = i == self.browser.current();
            let mark = match self.browser.answered_correctly(i) {
                Some(true) => "✓",
                Some(false) => "✗",
                None => " ",
            };
            let style = if is_current {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                match self.browser.answered_correctly(i) {
                    Some(true) => Style::default().fg(colors.success()),
                    Some(false) => Style::default().fg(colors.error()),
                    None => Style::default().fg(colors.text_dim()),
                }
            };
            tabs.push(Span::styled(
                format!(" [{}]{mark}{} ", i + 1, t.short_title),
                style,
            ));
        }
        Paragraph::new(Line::from(tabs)).render(layout[0], buf);

        let mut lines = vec![
            Line::from(Span::styled(
                topic.intro.clone(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for rule in &topic.rules {
            lines.push(Line::from(Span::styled(
                format!("{} {}", rule.emoji, rule.title),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                rule.description.clone(),
                Style::default().fg(colors.fg()),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Do This ✓",
            Style::default().fg(colors.success()).add_modifier(Modifier::BOLD),
        )));
        for example in &topic.do_examples {
            lines.push(Line::from(Span::styled(
                format!("  ✓ {example}"),
                Style::default().fg(colors.correct()),
            )));
        }
        lines.push(Line::from(Span::styled(
            "Don't Do This ✗",
            Style::default().fg(colors.error()).add_modifier(Modifier::BOLD),
        )));
        for example in &topic.dont_examples {
            lines.push(Line::from(Span::styled(
                format!("  ✗ {example}"),
                Style::default().fg(colors.incorrect()),
            )));
        }
        lines.push(Line::from(""));

        // Quick check
        lines.push(Line::from(Span::styled(
            format!("★ Quick Check! {}", topic.check.question),
            Style::default().fg(colors.star()).add_modifier(Modifier::BOLD),
        )));
        let picked = self.browser.picked(self.browser.current());
        for (i, option) in topic.check.options.iter().enumerate() {
            let style = match picked {
                None => Style::default().fg(colors.fg()),
                Some(_) if option.correct => Style::default().fg(colors.correct()),
                Some(p) if p == i => Style::default().fg(colors.incorrect()),
                Some(_) => Style::default().fg(colors.text_dim()),
            };
            let marker = match picked {
                Some(_) if option.correct => " ✓",
                Some(p) if p == i => " ✗",
                _ => "",
            };
            lines.push(Line::from(Span::styled(
                format!("  [{}] {} {}{marker}", i + 1, option.emoji, option.text),
                style,
            )));
        }
        if picked.is_some() {
            lines.push(Line::from(vec![
                Span::styled("Why: ", Style::default().fg(colors.star())),
                Span::styled(
                    topic.check.explanation.clone(),
                    Style::default().fg(colors.fg()),
                ),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(layout[1], buf);
    }
}
