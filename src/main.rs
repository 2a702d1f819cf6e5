mod app;
mod config;
mod content;
mod event;
mod games;
mod learn;
mod session;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::{App, AppScreen};
use event::{AppEvent, EventHandler};
use games::ActiveGame;
use games::sorting::Bucket;
use ui::components::game_picker::GamePicker;
use ui::components::guide_view::GuideView;
use ui::components::lesson_view::LessonView;
use ui::components::match_board::MatchBoard;
use ui::components::quiz_panel::QuizPanel;
use ui::components::result_card::ResultCard;
use ui::components::safety_view::SafetyView;
use ui::components::sort_board::SortBoard;
use ui::components::star_bar::StarBar;
use ui::layout::AppLayout;

#[derive(Parser)]
#[command(name = "aiquest", version, about = "Terminal AI-literacy tutor for kids and parents")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Start directly in a mode (kid, guide)")]
    mode: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new()?;

    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.set_theme(theme);
        }
    }
    match cli.mode.as_deref() {
        Some("kid") => app.enter_kid_mode(),
        Some("guide") => app.enter_guide(),
        _ => {}
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Home => handle_home_key(app, key),
        AppScreen::KidHome => handle_kid_home_key(app, key),
        AppScreen::Lessons => handle_lessons_key(app, key),
        AppScreen::Safety => handle_safety_key(app, key),
        AppScreen::GamePicker => handle_picker_key(app, key),
        AppScreen::Playing => handle_playing_key(app, key),
        AppScreen::Guide => handle_guide_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('k') => app.enter_kid_mode(),
        KeyCode::Char('a') => app.enter_guide(),
        KeyCode::Up => app.home_menu.prev(),
        KeyCode::Down => app.home_menu.next(),
        KeyCode::Enter => match app.home_menu.selected {
            0 => app.enter_kid_mode(),
            1 => app.enter_guide(),
            2 => app.should_quit = true,
            _ => {}
        },
        _ => {}
    }
}

fn handle_kid_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.exit_kid_mode(),
        KeyCode::Char('l') => app.go_lessons(),
        KeyCode::Char('s') => app.go_safety(),
        KeyCode::Char('g') => app.go_game_picker(),
        KeyCode::Up => app.kid_menu.prev(),
        KeyCode::Down => app.kid_menu.next(),
        KeyCode::Enter => match app.kid_menu.selected {
            0 => app.go_lessons(),
            1 => app.go_safety(),
            2 => app.go_game_picker(),
            _ => {}
        },
        _ => {}
    }
}

fn handle_lessons_key(app: &mut App, key: KeyEvent) {
    let Some(kid) = app.kid.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_kid_home(),
        KeyCode::Left | KeyCode::Char('p') => {
            kid.lessons.prev();
            app.scroll = 0;
        }
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Enter => {
            kid.lessons.complete_and_advance(&mut kid.stars);
            app.scroll = 0;
        }
        KeyCode::Char(ch @ '1'..='9') => {
            kid.lessons.goto(ch as usize - '1' as usize);
            app.scroll = 0;
        }
        KeyCode::Char('j') => app.scroll = app.scroll.saturating_add(1),
        KeyCode::Char('k') => app.scroll = app.scroll.saturating_sub(1),
        _ => {}
    }
}

fn handle_safety_key(app: &mut App, key: KeyEvent) {
    let Some(kid) = app.kid.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_kid_home(),
        KeyCode::Left | KeyCode::Char('p') => {
            kid.safety.prev();
            app.scroll = 0;
        }
        KeyCode::Right | KeyCode::Char('n') => {
            kid.safety.next();
            app.scroll = 0;
        }
        KeyCode::Tab => {
            let next = (kid.safety.current() + 1) % kid.safety.len();
            kid.safety.goto(next);
            app.scroll = 0;
        }
        KeyCode::Char(ch @ '1'..='9') => {
            let option = ch as usize - '1' as usize;
            if option < kid.safety.topic().check.options.len() {
                kid.safety.answer(option, &mut kid.stars);
            }
        }
        KeyCode::Char('j') => app.scroll = app.scroll.saturating_add(1),
        KeyCode::Char('k') => app.scroll = app.scroll.saturating_sub(1),
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_kid_home(),
        KeyCode::Char(ch @ '1'..='3') => {
            app.picker_selected = ch as usize - '1' as usize;
            app.picker_choose();
        }
        KeyCode::Up | KeyCode::Char('k') => app.picker_move(-1),
        KeyCode::Down | KeyCode::Char('j') => app.picker_move(1),
        KeyCode::Enter => app.picker_choose(),
        _ => {}
    }
}

fn handle_playing_key(app: &mut App, key: KeyEvent) {
    let complete = app.game.as_ref().is_some_and(ActiveGame::is_complete);
    if complete {
        match key.code {
            KeyCode::Char('r') => app.restart_game(),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.exit_game(),
            _ => {}
        }
        return;
    }

    match app.game {
        Some(ActiveGame::Quiz(_)) => match key.code {
            KeyCode::Esc => app.exit_game(),
            KeyCode::Char(ch @ '1'..='9') => {
                app.quiz_answer_index(ch as usize - '1' as usize);
            }
            KeyCode::Up | KeyCode::Char('k') => app.quiz_cursor_move(-1),
            KeyCode::Down | KeyCode::Char('j') => app.quiz_cursor_move(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.quiz_answer(),
            _ => {}
        },
        Some(ActiveGame::Match(_)) => match key.code {
            KeyCode::Esc => app.exit_game(),
            KeyCode::Tab => app.match_toggle_column(),
            KeyCode::Up | KeyCode::Char('k') => app.match_cursor_move(-1),
            KeyCode::Down | KeyCode::Char('j') => app.match_cursor_move(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.match_pick(),
            _ => {}
        },
        Some(ActiveGame::Sort(_)) => match key.code {
            KeyCode::Esc => app.exit_game(),
            KeyCode::Up | KeyCode::Char('k') => app.sort_cursor_move(-1),
            KeyCode::Down | KeyCode::Char('j') => app.sort_cursor_move(1),
            KeyCode::Char('s') => app.sort_classify(Bucket::Safe),
            KeyCode::Char('u') => app.sort_classify(Bucket::Unsafe),
            _ => {}
        },
        None => {}
    }
}

fn handle_guide_key(app: &mut App, key: KeyEvent) {
    let Some(guide) = app.guide.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.exit_guide(),
        KeyCode::Char(ch @ '1'..='9') => {
            guide.select_section(ch as usize - '1' as usize);
            app.scroll = 0;
        }
        KeyCode::Tab => {
            let next = (guide.section_index() + 1) % guide.sections().len();
            guide.select_section(next);
            app.scroll = 0;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            guide.prev_topic();
            app.scroll = 0;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            guide.next_topic();
            app.scroll = 0;
        }
        KeyCode::PageDown | KeyCode::Char('d') => app.scroll = app.scroll.saturating_add(3),
        KeyCode::PageUp | KeyCode::Char('u') => app.scroll = app.scroll.saturating_sub(3),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Home => render_home(frame, app),
        AppScreen::KidHome => render_kid_home(frame, app),
        AppScreen::Lessons => render_lessons(frame, app),
        AppScreen::Safety => render_safety(frame, app),
        AppScreen::GamePicker => render_picker(frame, app),
        AppScreen::Playing => render_playing(frame, app),
        AppScreen::Guide => render_guide(frame, app),
    }
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect, info: &str) {
    let colors = &app.theme.colors;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " aiquest ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            info.to_string(),
            Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect, hints: &str) {
    let colors = &app.theme.colors;
    let footer = Paragraph::new(Line::from(Span::styled(
        hints.to_string(),
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, area);
}

fn render_home(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    render_header(frame, app, layout.header, " AI literacy for the whole family");
    let menu_area = ui::layout::centered_rect(50, 80, layout.main);
    frame.render_widget(&app.home_menu, menu_area);
    render_footer(frame, app, layout.footer, " [k] Kid Mode  [a] Guide  [q] Quit ");
}

fn render_kid_home(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = AppLayout::new(frame.area());

    let Some(kid) = app.kid.as_ref() else {
        return;
    };
    let info = format!(" | ★ {} Stars", kid.stars.stars());
    render_header(frame, app, layout.header, &info);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(6),
        ])
        .split(layout.main);

    let star_bar = StarBar::new(
        "Your Learning Journey",
        kid.stars.stars(),
        kid.star_goal(),
        app.theme,
    );
    frame.render_widget(star_bar, rows[0]);

    let menu_area = ui::layout::centered_rect(60, 90, rows[1]);
    frame.render_widget(&app.kid_menu, menu_area);

    // Recent games this session
    let mut log_lines = vec![Line::from(Span::styled(
        " Recent games",
        Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
    ))];
    for summary in kid.log.iter().rev().take(4) {
        let star = if summary.rewarded { " ★" } else { "" };
        log_lines.push(Line::from(Span::styled(
            format!(
                " {}: {}/{} correct{}  ({})",
                summary.game.title(),
                summary.correct,
                summary.total,
                star,
                summary.finished_at.format("%H:%M"),
            ),
            Style::default().fg(if summary.rewarded {
                colors.success()
            } else {
                colors.fg()
            }),
        )));
    }
    if kid.log.is_empty() {
        log_lines.push(Line::from(Span::styled(
            " No games played yet. Try one!",
            Style::default().fg(colors.text_dim()),
        )));
    }
    frame.render_widget(Paragraph::new(log_lines), rows[2]);

    render_footer(
        frame,
        app,
        layout.footer,
        " [l] Lessons  [s] Safety  [g] Games  [Esc] Exit ",
    );
}

fn render_lessons(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let Some(kid) = app.kid.as_ref() else {
        return;
    };
    let info = format!(" | What is AI? | ★ {} Stars", kid.stars.stars());
    render_header(frame, app, layout.header, &info);
    frame.render_widget(LessonView::new(&kid.lessons, app.scroll, app.theme), layout.main);
    render_footer(
        frame,
        app,
        layout.footer,
        " [Enter/n] Finish & next  [p] Previous  [1-4] Jump  [j/k] Scroll  [Esc] Back ",
    );
}

fn render_safety(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let Some(kid) = app.kid.as_ref() else {
        return;
    };
    let info = format!(" | Stay Safe! | ★ {} Stars", kid.stars.stars());
    render_header(frame, app, layout.header, &info);
    frame.render_widget(SafetyView::new(&kid.safety, app.scroll, app.theme), layout.main);
    render_footer(
        frame,
        app,
        layout.footer,
        " [n/p] Topics  [1-4] Answer check  [j/k] Scroll  [Esc] Back ",
    );
}

fn render_picker(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let Some(kid) = app.kid.as_ref() else {
        return;
    };
    let info = format!(" | Fun Games! | ★ {} Stars", kid.stars.stars());
    render_header(frame, app, layout.header, &info);
    let picker_area = ui::layout::centered_rect(60, 80, layout.main);
    frame.render_widget(GamePicker::new(app.picker_selected, app.theme), picker_area);
    render_footer(
        frame,
        app,
        layout.footer,
        " [1-3] Play  [j/k] Move  [Enter] Choose  [Esc] Back ",
    );
}

fn render_playing(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let Some(kid) = app.kid.as_ref() else {
        return;
    };
    let Some(ref game) = app.game else {
        return;
    };

    let info = format!(" | {} | ★ {} Stars", game.kind().title(), kid.stars.stars());
    render_header(frame, app, layout.header, &info);

    if let Some(summary) = game.summary() {
        let card_area = ui::layout::centered_rect(60, 70, layout.main);
        frame.render_widget(
            ResultCard::new(
                summary.game,
                summary.correct,
                summary.total,
                summary.rewarded,
                app.theme,
            ),
            card_area,
        );
        render_footer(frame, app, layout.footer, " [r] Play again  [Esc] Back to games ");
        return;
    }

    match game {
        ActiveGame::Quiz(quiz) => {
            frame.render_widget(QuizPanel::new(quiz, app.quiz_cursor, app.theme), layout.main);
            render_footer(
                frame,
                app,
                layout.footer,
                " [1-4] Answer  [j/k] Move  [Enter] Pick  [Esc] Leave ",
            );
        }
        ActiveGame::Match(engine) => {
            frame.render_widget(
                MatchBoard::new(
                    engine,
                    &app.def_order,
                    app.match_column,
                    app.match_cursor,
                    app.theme,
                ),
                layout.main,
            );
            render_footer(
                frame,
                app,
                layout.footer,
                " [Tab] Switch column  [j/k] Move  [Enter] Pick  [Esc] Leave ",
            );
        }
        ActiveGame::Sort(engine) => {
            frame.render_widget(SortBoard::new(engine, app.sort_cursor, app.theme), layout.main);
            render_footer(
                frame,
                app,
                layout.footer,
                " [j/k] Move  [s] Safe  [u] Unsafe  [Esc] Leave ",
            );
        }
    }
}

fn render_guide(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let Some(guide) = app.guide.as_ref() else {
        return;
    };
    render_header(frame, app, layout.header, " | Parent & Educator Guide");
    frame.render_widget(GuideView::new(guide, app.scroll, app.theme), layout.main);
    render_footer(
        frame,
        app,
        layout.footer,
        " [1-4/Tab] Sections  [j/k] Topics  [d/u] Scroll  [Esc] Back ",
    );
}
