use crate::content::TermPair;
use crate::games::score::ScoreTracker;

/// Click-a-term-then-click-a-definition pairing game. Correctness is
/// positional: the right definition for the term at index i is the
/// definition at index i, whatever order the view shows them in.
pub struct MatchEngine {
    pairs: Vec<TermPair>,
    selected_term: Option<usize>,
    assignments: Vec<Option<usize>>,
    complete: bool,
    rewarded: bool,
}

impl MatchEngine {
    pub fn new(pairs: Vec<TermPair>) -> Self {
        debug_assert!(!pairs.is_empty());
        let assignments = vec![None; pairs.len()];
        Self {
            pairs,
            selected_term: None,
            assignments,
            complete: false,
            rewarded: false,
        }
    }

    /// Select (or re-select) the term to pair next. Ignored for terms that
    /// already have a definition and after completion. Selecting a second
    /// term simply replaces the first selection.
    pub fn select_term(&mut self, term: usize) {
        debug_assert!(term < self.pairs.len());
        if self.complete || self.assignments[term].is_some() {
            return;
        }
        self.selected_term = Some(term);
    }

    /// Commit the selected term to definition `def`. A click with no term
    /// selected, or on a definition that is already taken, does nothing.
    /// The assignment that covers the last unpaired term completes the game;
    /// a star is awarded iff every pairing is positionally correct.
    pub fn select_definition(&mut self, def: usize, tracker: &mut ScoreTracker) {
        debug_assert!(def < self.pairs.len());
        if self.complete || self.definition_taken(def) {
            return;
        }
        let Some(term) = self.selected_term.take() else {
            return;
        };
        self.assignments[term] = Some(def);

        if self.assignments.iter().all(Option::is_some) {
            self.complete = true;
            self.rewarded = self.correct_count() == self.pairs.len();
            if self.rewarded {
                tracker.award();
            }
        }
    }

    pub fn restart(&mut self) {
        self.selected_term = None;
        self.assignments = vec![None; self.pairs.len()];
        self.complete = false;
        self.rewarded = false;
    }

    pub fn definition_taken(&self, def: usize) -> bool {
        self.assignments.iter().any(|a| *a == Some(def))
    }

    pub fn correct_count(&self) -> usize {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(term, def)| **def == Some(*term))
            .count()
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_some()).count()
    }

    pub fn assignment(&self, term: usize) -> Option<usize> {
        self.assignments[term]
    }

    pub fn selected_term(&self) -> Option<usize> {
        self.selected_term
    }

    pub fn pairs(&self) -> &[TermPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn rewarded(&self) -> bool {
        self.rewarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(n: usize) -> Vec<TermPair> {
        (0..n)
            .map(|i| TermPair {
                emoji: "🤖".to_string(),
                term: format!("term {i}"),
                definition: format!("definition {i}"),
            })
            .collect()
    }

    fn assign(game: &mut MatchEngine, term: usize, def: usize, tracker: &mut ScoreTracker) {
        game.select_term(term);
        game.select_definition(def, tracker);
    }

    #[test]
    fn identity_assignment_earns_the_star() {
        let mut game = MatchEngine::new(pairs(5));
        let mut tracker = ScoreTracker::new();
        for i in 0..5 {
            assert!(!game.is_complete());
            assign(&mut game, i, i, &mut tracker);
        }
        assert!(game.is_complete());
        assert_eq!(game.correct_count(), 5);
        assert!(game.rewarded());
        assert_eq!(tracker.stars(), 1);
    }

    #[test]
    fn one_swap_means_no_reward() {
        let mut game = MatchEngine::new(pairs(5));
        let mut tracker = ScoreTracker::new();
        assign(&mut game, 0, 1, &mut tracker);
        assign(&mut game, 1, 0, &mut tracker);
        for i in 2..5 {
            assign(&mut game, i, i, &mut tracker);
        }
        assert!(game.is_complete());
        assert_eq!(game.correct_count(), 3);
        assert!(!game.rewarded());
        assert_eq!(tracker.stars(), 0);
    }

    #[test]
    fn completion_happens_exactly_when_all_terms_are_paired() {
        let mut game = MatchEngine::new(pairs(3));
        let mut tracker = ScoreTracker::new();
        assign(&mut game, 0, 0, &mut tracker);
        assert!(!game.is_complete());
        assign(&mut game, 1, 1, &mut tracker);
        assert!(!game.is_complete());
        assign(&mut game, 2, 2, &mut tracker);
        assert!(game.is_complete());
    }

    #[test]
    fn definition_click_without_selection_is_a_no_op() {
        let mut game = MatchEngine::new(pairs(3));
        let mut tracker = ScoreTracker::new();
        game.select_definition(0, &mut tracker);
        assert_eq!(game.assigned_count(), 0);
    }

    #[test]
    fn reselecting_a_term_replaces_the_selection() {
        let mut game = MatchEngine::new(pairs(3));
        let mut tracker = ScoreTracker::new();
        game.select_term(0);
        game.select_term(2);
        assert_eq!(game.selected_term(), Some(2));
        game.select_definition(2, &mut tracker);
        // Only the replacement selection got an assignment.
        assert_eq!(game.assignment(0), None);
        assert_eq!(game.assignment(2), Some(2));
        assert_eq!(game.assigned_count(), 1);
    }

    #[test]
    fn taken_definition_cannot_be_reused() {
        let mut game = MatchEngine::new(pairs(3));
        let mut tracker = ScoreTracker::new();
        assign(&mut game, 0, 1, &mut tracker);

        game.select_term(1);
        game.select_definition(1, &mut tracker);
        assert_eq!(game.assignment(1), None);
        // The selection survives the rejected click and can commit elsewhere.
        assert_eq!(game.selected_term(), Some(1));
        game.select_definition(0, &mut tracker);
        assert_eq!(game.assignment(1), Some(0));
    }

    #[test]
    fn assigned_term_cannot_be_reselected() {
        let mut game = MatchEngine::new(pairs(3));
        let mut tracker = ScoreTracker::new();
        assign(&mut game, 0, 0, &mut tracker);
        game.select_term(0);
        assert_eq!(game.selected_term(), None);
    }

    #[test]
    fn restart_matches_fresh_session() {
        let mut game = MatchEngine::new(pairs(3));
        let mut tracker = ScoreTracker::new();
        for i in 0..3 {
            assign(&mut game, i, (i + 1) % 3, &mut tracker);
        }
        assert!(game.is_complete());

        game.restart();
        assert_eq!(game.assigned_count(), 0);
        assert_eq!(game.selected_term(), None);
        assert!(!game.is_complete());
        assert!(!game.rewarded());
        assert_eq!(game.correct_count(), 0);
    }

    #[test]
    fn operations_after_completion_are_ignored() {
        let mut game = MatchEngine::new(pairs(2));
        let mut tracker = ScoreTracker::new();
        assign(&mut game, 0, 0, &mut tracker);
        assign(&mut game, 1, 1, &mut tracker);
        assert!(game.is_complete());
        assert_eq!(tracker.stars(), 1);

        game.select_term(0);
        game.select_definition(1, &mut tracker);
        assert_eq!(game.correct_count(), 2);
        assert_eq!(tracker.stars(), 1);
    }
}
