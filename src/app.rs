use std::time::Instant;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::config::Config;
use crate::content::ContentPack;
use crate::games::quiz::AdvanceToken;
use crate::games::sorting::Bucket;
use crate::games::{ActiveGame, GameKind};
use crate::learn::GuideBrowser;
use crate::session::KidSession;
use crate::ui::components::match_board::MatchColumn;
use crate::ui::components::menu::{Menu, MenuItem};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Home,
    KidHome,
    Lessons,
    Safety,
    GamePicker,
    Playing,
    Guide,
}

pub struct App {
    pub screen: AppScreen,
    pub config: Config,
    pub theme: &'static Theme,
    pub content: ContentPack,

    /// Kid-mode state; Some only while inside kid mode.
    pub kid: Option<KidSession>,
    /// Engine of the game being played; Some only on the Playing screen.
    pub game: Option<ActiveGame>,
    /// The one deferred action in the app: the quiz reveal-then-advance.
    pub pending_advance: Option<AdvanceToken>,

    // Presentation-only state. Engines never see display order or cursors.
    pub def_order: Vec<usize>,
    pub match_column: MatchColumn,
    pub match_cursor: usize,
    pub quiz_cursor: usize,
    pub sort_cursor: usize,
    pub picker_selected: usize,
    pub scroll: u16,

    /// Adult-mode state; Some only while inside the guide.
    pub guide: Option<GuideBrowser>,

    pub home_menu: Menu<'static>,
    pub kid_menu: Menu<'static>,
    pub should_quit: bool,
    completion_logged: bool,
    rng: SmallRng,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let content = ContentPack::load()?;

        let home_menu = Menu::new(
            "aiquest",
            "Explore the world of AI, safely",
            vec![
                MenuItem::new("k", "Kid Mode", "Lessons, safety tips, and games with stars"),
                MenuItem::new("a", "Parent & Educator Guide", "Reference for grown-ups"),
                MenuItem::new("q", "Quit", "Leave aiquest"),
            ],
            theme,
        );
        let kid_menu = Menu::new(
            "AI Adventure!",
            "Let's explore Artificial Intelligence together!",
            vec![
                MenuItem::new("l", "What is AI?", "Discover how AI thinks and learns"),
                MenuItem::new("s", "Stay Safe!", "Learn how to use AI safely"),
                MenuItem::new("g", "Fun Games!", "Play games and earn stars"),
            ],
            theme,
        );

        Ok(Self {
            screen: AppScreen::Home,
            config,
            theme,
            content,
            kid: None,
            game: None,
            pending_advance: None,
            def_order: Vec::new(),
            match_column: MatchColumn::Terms,
            match_cursor: 0,
            quiz_cursor: 0,
            sort_cursor: 0,
            picker_selected: 0,
            scroll: 0,
            guide: None,
            home_menu,
            kid_menu,
            should_quit: false,
            completion_logged: false,
            rng: SmallRng::from_entropy(),
        })
    }

    pub fn set_theme(&mut self, theme: &'static Theme) {
        self.theme = theme;
        self.home_menu.theme = theme;
        self.kid_menu.theme = theme;
    }

    // ----- top-level navigation -----

    pub fn enter_kid_mode(&mut self) {
        self.kid = Some(KidSession::new(&self.content));
        self.screen = AppScreen::KidHome;
    }

    /// Leaving kid mode throws the whole session away, stars included.
    pub fn exit_kid_mode(&mut self) {
        self.abandon_game();
        self.kid = None;
        self.screen = AppScreen::Home;
    }

    pub fn enter_guide(&mut self) {
        self.guide = Some(GuideBrowser::new(self.content.guide_sections.clone()));
        self.scroll = 0;
        self.screen = AppScreen::Guide;
    }

    pub fn exit_guide(&mut self) {
        self.guide = None;
        self.screen = AppScreen::Home;
    }

    pub fn go_kid_home(&mut self) {
        self.abandon_game();
        self.scroll = 0;
        self.screen = AppScreen::KidHome;
    }

    pub fn go_lessons(&mut self) {
        self.scroll = 0;
        self.screen = AppScreen::Lessons;
    }

    pub fn go_safety(&mut self) {
        self.scroll = 0;
        self.screen = AppScreen::Safety;
    }

    pub fn go_game_picker(&mut self) {
        self.abandon_game();
        self.picker_selected = 0;
        self.screen = AppScreen::GamePicker;
    }

    // ----- games -----

    /// Build a fresh engine for `kind` and switch to it. Nothing carries
    /// over from any previous round.
    pub fn choose_game(&mut self, kind: GameKind) {
        let game = ActiveGame::start(kind, &self.content, self.config.reveal_delay());
        if let ActiveGame::Match(ref engine) = game {
            self.def_order = (0..engine.len()).collect();
            if self.config.shuffle_definitions {
                self.def_order.shuffle(&mut self.rng);
            }
        }
        self.quiz_cursor = 0;
        self.match_cursor = 0;
        self.match_column = MatchColumn::Terms;
        self.sort_cursor = 0;
        self.pending_advance = None;
        self.completion_logged = false;
        self.game = Some(game);
        self.screen = AppScreen::Playing;
    }

    /// Drop the current engine and any pending reveal timer. A timer that
    /// already fired conceptually belongs to the dropped session; dropping
    /// the token here is what keeps it from ever touching a new one.
    fn abandon_game(&mut self) {
        self.game = None;
        self.pending_advance = None;
    }

    pub fn exit_game(&mut self) {
        self.abandon_game();
        self.screen = AppScreen::GamePicker;
    }

    pub fn restart_game(&mut self) {
        self.pending_advance = None;
        self.completion_logged = false;
        self.quiz_cursor = 0;
        self.match_cursor = 0;
        self.match_column = MatchColumn::Terms;
        self.sort_cursor = 0;
        match self.game {
            Some(ActiveGame::Quiz(ref mut quiz)) => quiz.restart(),
            Some(ActiveGame::Match(ref mut game)) => {
                game.restart();
                if self.config.shuffle_definitions {
                    self.def_order.shuffle(&mut self.rng);
                }
            }
            Some(ActiveGame::Sort(ref mut game)) => game.restart(),
            None => {}
        }
    }

    /// Lock in the quiz answer under the cursor and schedule the advance.
    pub fn quiz_answer(&mut self) {
        let Some(ActiveGame::Quiz(ref mut quiz)) = self.game else {
            return;
        };
        if let Some(token) = quiz.select_answer(self.quiz_cursor) {
            self.pending_advance = Some(token);
        }
    }

    pub fn quiz_answer_index(&mut self, option: usize) {
        let valid = match self.game {
            Some(ActiveGame::Quiz(ref quiz)) => option < quiz.question().options.len(),
            _ => return,
        };
        if valid {
            self.quiz_cursor = option;
            self.quiz_answer();
        }
    }

    /// Fire the pending quiz advance once its deadline has passed. Called
    /// from the tick handler; between ticks the token just waits.
    pub fn on_tick(&mut self) {
        let Some(token) = self.pending_advance else {
            return;
        };
        if Instant::now() < token.due {
            return;
        }
        self.pending_advance = None;
        if let (Some(ActiveGame::Quiz(quiz)), Some(kid)) =
            (self.game.as_mut(), self.kid.as_mut())
        {
            quiz.advance(token, &mut kid.stars);
            self.quiz_cursor = 0;
        }
        self.record_completion();
    }

    /// Move the match cursor's column or commit the row under the cursor.
    pub fn match_pick(&mut self) {
        let Some(ActiveGame::Match(ref mut game)) = self.game else {
            return;
        };
        let Some(kid) = self.kid.as_mut() else {
            return;
        };
        match self.match_column {
            MatchColumn::Terms => {
                game.select_term(self.match_cursor);
                if game.selected_term().is_some() {
                    self.match_column = MatchColumn::Definitions;
                    self.match_cursor = 0;
                }
            }
            MatchColumn::Definitions => {
                let def = self.def_order[self.match_cursor];
                game.select_definition(def, &mut kid.stars);
                if game.selected_term().is_none() {
                    self.match_column = MatchColumn::Terms;
                    self.match_cursor = 0;
                }
            }
        }
        self.record_completion();
    }

    pub fn match_toggle_column(&mut self) {
        self.match_column = match self.match_column {
            MatchColumn::Terms => MatchColumn::Definitions,
            MatchColumn::Definitions => MatchColumn::Terms,
        };
        self.match_cursor = 0;
    }

    pub fn match_cursor_move(&mut self, delta: isize) {
        let Some(ActiveGame::Match(ref game)) = self.game else {
            return;
        };
        let len = game.len();
        self.match_cursor = step_cursor(self.match_cursor, delta, len);
    }

    pub fn quiz_cursor_move(&mut self, delta: isize) {
        let Some(ActiveGame::Quiz(ref quiz)) = self.game else {
            return;
        };
        let len = quiz.question().options.len();
        self.quiz_cursor = step_cursor(self.quiz_cursor, delta, len);
    }

    pub fn sort_cursor_move(&mut self, delta: isize) {
        let Some(ActiveGame::Sort(ref game)) = self.game else {
            return;
        };
        let len = game.remaining_len();
        self.sort_cursor = step_cursor(self.sort_cursor, delta, len);
    }

    /// Classify the pool item under the cursor.
    pub fn sort_classify(&mut self, bucket: Bucket) {
        let Some(ActiveGame::Sort(ref mut game)) = self.game else {
            return;
        };
        let Some(kid) = self.kid.as_mut() else {
            return;
        };
        let remaining = game.remaining();
        let Some(&index) = remaining.get(self.sort_cursor) else {
            return;
        };
        game.classify(index, bucket, &mut kid.stars);
        let left = game.remaining_len();
        if left > 0 && self.sort_cursor >= left {
            self.sort_cursor = left - 1;
        }
        self.record_completion();
    }

    pub fn picker_move(&mut self, delta: isize) {
        self.picker_selected = step_cursor(self.picker_selected, delta, GameKind::ALL.len());
    }

    pub fn picker_choose(&mut self) {
        self.choose_game(GameKind::ALL[self.picker_selected]);
    }

    /// Append the finished game to the session log, once per round. Input
    /// on a completed engine is a no-op but still lands here, so the flag
    /// keeps a round from being logged twice.
    fn record_completion(&mut self) {
        if self.completion_logged {
            return;
        }
        let Some(ref game) = self.game else {
            return;
        };
        let Some(kid) = self.kid.as_mut() else {
            return;
        };
        if let Some(summary) = game.summary() {
            kid.record(summary);
            self.completion_logged = true;
        }
    }
}

fn step_cursor(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let next = (current as isize + delta).rem_euclid(len);
    next as usize
}
