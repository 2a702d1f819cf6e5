use crate::content::SortableItem;
use crate::games::score::ScoreTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bucket {
    Safe,
    Unsafe,
}

impl Bucket {
    /// The bucket a given item belongs in.
    pub fn for_item(item: &SortableItem) -> Bucket {
        if item.safe { Bucket::Safe } else { Bucket::Unsafe }
    }

    pub fn label(self) -> &'static str {
        match self {
            Bucket::Safe => "Safe",
            Bucket::Unsafe => "Unsafe",
        }
    }
}

/// Classify-everything game: each item goes into one of two buckets, a
/// wrong call stays wrong for the round, and the star requires a clean
/// sweep. Correctness is evaluated once, from the final committed
/// bucketing, when the pool empties.
pub struct SortEngine {
    items: Vec<SortableItem>,
    bucketing: Vec<Option<Bucket>>,
    complete: bool,
    rewarded: bool,
}

impl SortEngine {
    pub fn new(items: Vec<SortableItem>) -> Self {
        debug_assert!(!items.is_empty());
        let bucketing = vec![None; items.len()];
        Self {
            items,
            bucketing,
            complete: false,
            rewarded: false,
        }
    }

    /// Put item `index` into `bucket`. Ignored if the item is already
    /// bucketed or the round is over; otherwise the remaining pool shrinks
    /// by exactly one. The call that empties the pool completes the round.
    pub fn classify(&mut self, index: usize, bucket: Bucket, tracker: &mut ScoreTracker) {
        debug_assert!(index < self.items.len());
        if self.complete || self.bucketing[index].is_some() {
            return;
        }
        self.bucketing[index] = Some(bucket);

        if self.bucketing.iter().all(Option::is_some) {
            self.complete = true;
            self.rewarded = self.correct_count() == self.items.len();
            if self.rewarded {
                tracker.award();
            }
        }
    }

    pub fn restart(&mut self) {
        self.bucketing = vec![None; self.items.len()];
        self.complete = false;
        self.rewarded = false;
    }

    /// Indices still waiting to be classified, in canonical order.
    pub fn remaining(&self) -> Vec<usize> {
        self.bucketing
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn remaining_len(&self) -> usize {
        self.bucketing.iter().filter(|b| b.is_none()).count()
    }

    /// Indices already placed in `bucket`, in the order they appear in the
    /// canonical list.
    pub fn in_bucket(&self, bucket: Bucket) -> Vec<usize> {
        self.bucketing
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == Some(bucket))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn correct_count(&self) -> usize {
        self.bucketing
            .iter()
            .enumerate()
            .filter(|(i, b)| **b == Some(Bucket::for_item(&self.items[*i])))
            .count()
    }

    pub fn bucket_of(&self, index: usize) -> Option<Bucket> {
        self.bucketing[index]
    }

    pub fn items(&self) -> &[SortableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
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

    /// Five safe items followed by five unsafe ones.
    fn items() -> Vec<SortableItem> {
        (0..10)
            .map(|i| SortableItem {
                emoji: "✅".to_string(),
                label: format!("item {i}"),
                safe: i < 5,
            })
            .collect()
    }

    #[test]
    fn perfect_sort_earns_the_star() {
        let mut game = SortEngine::new(items());
        let mut tracker = ScoreTracker::new();
        for i in 0..10 {
            let bucket = if i < 5 { Bucket::Safe } else { Bucket::Unsafe };
            game.classify(i, bucket, &mut tracker);
        }
        assert!(game.is_complete());
        assert_eq!(game.correct_count(), 10);
        assert!(game.rewarded());
        assert_eq!(tracker.stars(), 1);
    }

    #[test]
    fn single_misclassification_means_no_reward() {
        let mut game = SortEngine::new(items());
        let mut tracker = ScoreTracker::new();
        // Item 0 is safe but goes into the unsafe bucket.
        game.classify(0, Bucket::Unsafe, &mut tracker);
        for i in 1..10 {
            let bucket = if i < 5 { Bucket::Safe } else { Bucket::Unsafe };
            game.classify(i, bucket, &mut tracker);
        }
        assert!(game.is_complete());
        assert_eq!(game.correct_count(), 9);
        assert!(!game.rewarded());
        assert_eq!(tracker.stars(), 0);
    }

    #[test]
    fn misclassified_final_item_is_judged_from_committed_state() {
        // Regression shape: the last classify must be part of the
        // correctness evaluation, not a stale snapshot of it.
        let mut game = SortEngine::new(items());
        let mut tracker = ScoreTracker::new();
        for i in 0..9 {
            let bucket = if i < 5 { Bucket::Safe } else { Bucket::Unsafe };
            game.classify(i, bucket, &mut tracker);
        }
        game.classify(9, Bucket::Safe, &mut tracker);
        assert!(game.is_complete());
        assert_eq!(game.correct_count(), 9);
        assert!(!game.rewarded());
    }

    #[test]
    fn pool_shrinks_by_one_per_classify() {
        let mut game = SortEngine::new(items());
        let mut tracker = ScoreTracker::new();
        assert_eq!(game.remaining_len(), 10);
        for i in 0..10 {
            game.classify(i, Bucket::Safe, &mut tracker);
            assert_eq!(game.remaining_len(), 10 - i - 1);
        }
    }

    #[test]
    fn reclassification_is_ignored() {
        let mut game = SortEngine::new(items());
        let mut tracker = ScoreTracker::new();
        game.classify(0, Bucket::Unsafe, &mut tracker);
        game.classify(0, Bucket::Safe, &mut tracker);
        assert_eq!(game.bucket_of(0), Some(Bucket::Unsafe));
        assert_eq!(game.remaining_len(), 9);
    }

    #[test]
    fn bucket_listings_preserve_canonical_order() {
        let mut game = SortEngine::new(items());
        let mut tracker = ScoreTracker::new();
        game.classify(7, Bucket::Unsafe, &mut tracker);
        game.classify(2, Bucket::Safe, &mut tracker);
        game.classify(5, Bucket::Unsafe, &mut tracker);
        assert_eq!(game.in_bucket(Bucket::Unsafe), vec![5, 7]);
        assert_eq!(game.in_bucket(Bucket::Safe), vec![2]);
        assert_eq!(game.remaining(), vec![0, 1, 3, 4, 6, 8, 9]);
    }

    #[test]
    fn restart_matches_fresh_session() {
        let mut game = SortEngine::new(items());
        let mut tracker = ScoreTracker::new();
        for i in 0..10 {
            game.classify(i, Bucket::Unsafe, &mut tracker);
        }
        assert!(game.is_complete());

        game.restart();
        assert_eq!(game.remaining_len(), 10);
        assert_eq!(game.correct_count(), 0);
        assert!(!game.is_complete());
        assert!(!game.rewarded());
    }

    #[test]
    fn classify_after_completion_is_ignored() {
        let mut game = SortEngine::new(items());
        let mut tracker = ScoreTracker::new();
        for i in 0..10 {
            let bucket = if i < 5 { Bucket::Safe } else { Bucket::Unsafe };
            game.classify(i, bucket, &mut tracker);
        }
        assert_eq!(tracker.stars(), 1);
        game.classify(0, Bucket::Unsafe, &mut tracker);
        assert_eq!(game.correct_count(), 10);
        assert_eq!(tracker.stars(), 1);
    }
}
