use std::time::{Duration, Instant};

use crate::content::Question;
use crate::games::score::ScoreTracker;

/// Stars are awarded from this score upward (3 of the canonical 5).
pub const PASS_SCORE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for an answer to the current question.
    Answering,
    /// Answer recorded; correctness and explanation shown until the reveal
    /// delay elapses.
    Revealing,
    Complete,
}

/// Handle for the deferred advance that follows an answer. It carries the
/// epoch of the session that issued it: a token fired after the session was
/// restarted or replaced no longer matches and does nothing.
#[derive(Clone, Copy, Debug)]
pub struct AdvanceToken {
    epoch: u64,
    pub due: Instant,
}

pub struct QuizEngine {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    selected: Option<usize>,
    phase: QuizPhase,
    rewarded: bool,
    epoch: u64,
    reveal_delay: Duration,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, reveal_delay: Duration) -> Self {
        debug_assert!(!questions.is_empty());
        Self {
            questions,
            current: 0,
            score: 0,
            selected: None,
            phase: QuizPhase::Answering,
            rewarded: false,
            epoch: 0,
            reveal_delay,
        }
    }

    /// Record the answer to the current question. One-shot: while the answer
    /// reveal is showing (or after completion) further calls are ignored and
    /// return None. On success returns the token the caller must fire once
    /// the reveal delay has passed.
    pub fn select_answer(&mut self, option: usize) -> Option<AdvanceToken> {
        if self.phase != QuizPhase::Answering {
            return None;
        }
        debug_assert!(option < self.questions[self.current].options.len());
        self.selected = Some(option);
        if option == self.questions[self.current].correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Revealing;
        Some(AdvanceToken {
            epoch: self.epoch,
            due: Instant::now() + self.reveal_delay,
        })
    }

    /// Apply the deferred advance. A token from a stale epoch (the session
    /// was restarted or torn down since it was issued) is a no-op, as is any
    /// call outside the reveal phase. On the last question this is the
    /// terminal transition: the tracker is awarded a star iff the final
    /// score reaches [`PASS_SCORE`].
    pub fn advance(&mut self, token: AdvanceToken, tracker: &mut ScoreTracker) {
        if token.epoch != self.epoch || self.phase != QuizPhase::Revealing {
            return;
        }
        // Each applied advance retires the epoch, so a token can act at most
        // once and never on a later question's reveal.
        self.epoch += 1;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.phase = QuizPhase::Answering;
        } else {
            self.phase = QuizPhase::Complete;
            self.rewarded = self.score >= PASS_SCORE;
            if self.rewarded {
                tracker.award();
            }
        }
    }

    /// Back to a freshly started session. Bumps the epoch so any pending
    /// advance token from the previous run is dead.
    pub fn restart(&mut self) {
        self.current = 0;
        self.score = 0;
        self.selected = None;
        self.phase = QuizPhase::Answering;
        self.rewarded = false;
        self.epoch += 1;
    }

    pub fn question(&self) -> &Question {
        &self.questions[self.current.min(self.questions.len() - 1)]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    pub fn rewarded(&self) -> bool {
        self.rewarded
    }

    /// Fraction of questions answered, for the progress bar.
    pub fn progress(&self) -> f64 {
        let answered = match self.phase {
            QuizPhase::Answering => self.current,
            QuizPhase::Revealing => self.current + 1,
            QuizPhase::Complete => self.questions.len(),
        };
        answered as f64 / self.questions.len() as f64
    }
}
