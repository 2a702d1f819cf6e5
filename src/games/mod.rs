pub mod matching;
pub mod quiz;
pub mod score;
pub mod sorting;

use std::time::Duration;

use chrono::Utc;

use crate::content::ContentPack;
use crate::games::matching::MatchEngine;
use crate::games::quiz::QuizEngine;
use crate::games::score::SessionSummary;
use crate::games::sorting::SortEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKind {
    Quiz,
    Match,
    Sort,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Quiz, GameKind::Match, GameKind::Sort];

    pub fn title(self) -> &'static str {
        match self {
            GameKind::Quiz => "AI Quiz",
            GameKind::Match => "Match Terms",
            GameKind::Sort => "Safe or Unsafe?",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            GameKind::Quiz => "Answer fun questions about AI!",
            GameKind::Match => "Match AI words with their meanings!",
            GameKind::Sort => "Sort actions into safe and unsafe!",
        }
    }

    pub fn difficulty(self) -> &'static str {
        match self {
            GameKind::Quiz | GameKind::Sort => "Easy",
            GameKind::Match => "Medium",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameKind::Quiz => "quiz",
            GameKind::Match => "match",
            GameKind::Sort => "sort",
        }
    }
}

/// The engine for the game currently being played. Choosing a game from the
/// picker always constructs a fresh value; leaving a game drops it, so no
/// state carries over between rounds or between game kinds.
pub enum ActiveGame {
    Quiz(QuizEngine),
    Match(MatchEngine),
    Sort(SortEngine),
}

impl ActiveGame {
    pub fn start(kind: GameKind, pack: &ContentPack, reveal_delay: Duration) -> Self {
        match kind {
            GameKind::Quiz => {
                ActiveGame::Quiz(QuizEngine::new(pack.questions.clone(), reveal_delay))
            }
            GameKind::Match => ActiveGame::Match(MatchEngine::new(pack.pairs.clone())),
            GameKind::Sort => ActiveGame::Sort(SortEngine::new(pack.sort_items.clone())),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Quiz(_) => GameKind::Quiz,
            ActiveGame::Match(_) => GameKind::Match,
            ActiveGame::Sort(_) => GameKind::Sort,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            ActiveGame::Quiz(quiz) => quiz.is_complete(),
            ActiveGame::Match(game) => game.is_complete(),
            ActiveGame::Sort(game) => game.is_complete(),
        }
    }

    /// Result line for the session log; None while the game is in progress.
    pub fn summary(&self) -> Option<SessionSummary> {
        if !self.is_complete() {
            return None;
        }
        let (correct, total, rewarded) = match self {
            ActiveGame::Quiz(quiz) => (quiz.score(), quiz.len(), quiz.rewarded()),
            ActiveGame::Match(game) => (game.correct_count(), game.len(), game.rewarded()),
            ActiveGame::Sort(game) => (game.correct_count(), game.len(), game.rewarded()),
        };
        Some(SessionSummary {
            game: self.kind(),
            correct,
            total,
            rewarded,
            finished_at: Utc::now(),
        })
    }
}
