use chrono::{DateTime, Utc};

use crate::games::GameKind;

/// Star counter shared by every activity in a kid session. Owned by the
/// session and passed `&mut` into the operations that can complete an
/// activity; it only ever moves up, and it dies with the session.
#[derive(Clone, Debug, Default)]
pub struct ScoreTracker {
    stars: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self) {
        self.stars += 1;
    }

    pub fn stars(&self) -> u32 {
        self.stars
    }
}

/// One finished game, kept in the in-memory session log.
#[derive(Clone, Debug)]
pub struct SessionSummary {
    pub game: GameKind,
    pub correct: usize,
    pub total: usize,
    pub rewarded: bool,
    pub finished_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_is_monotone() {
        let mut tracker = ScoreTracker::new();
        assert_eq!(tracker.stars(), 0);
        let mut last = 0;
        for _ in 0..12 {
            tracker.award();
            assert!(tracker.stars() > last);
            last = tracker.stars();
        }
        assert_eq!(tracker.stars(), 12);
    }
}
