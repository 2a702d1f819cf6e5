use crate::content::SafetyTopic;
use crate::games::score::ScoreTracker;

/// Browser over the safety topics. Each topic ends with a one-shot
/// quick-check: the first option picked is final for the session, and only
/// a correct first pick earns the topic's star.
pub struct SafetyBrowser {
    topics: Vec<SafetyTopic>,
    current: usize,
    answers: Vec<Option<usize>>,
}

impl SafetyBrowser {
    pub fn new(topics: Vec<SafetyTopic>) -> Self {
        debug_assert!(!topics.is_empty());
        let answers = vec![None; topics.len()];
        Self {
            topics,
            current: 0,
            answers,
        }
    }

    /// Answer the current topic's quick-check with option `option`.
    /// Later picks on an already-answered topic are ignored. Returns true
    /// when this pick was correct (and therefore awarded a star).
    pub fn answer(&mut self, option: usize, tracker: &mut ScoreTracker) -> bool {
        let topic = &self.topics[self.current];
        debug_assert!(option < topic.check.options.len());
        if self.answers[self.current].is_some() {
            return false;
        }
        self.answers[self.current] = Some(option);
        let correct = topic.check.options[option].correct;
        if correct {
            tracker.award();
        }
        correct
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.topics.len() {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn goto(&mut self, index: usize) {
        if index < self.topics.len() {
            self.current = index;
        }
    }

    pub fn topic(&self) -> &SafetyTopic {
        &self.topics[self.current]
    }

    pub fn topics(&self) -> &[SafetyTopic] {
        &self.topics
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// The option picked for topic `index`, if its check has been answered.
    pub fn picked(&self, index: usize) -> Option<usize> {
        self.answers[index]
    }

    pub fn answered_correctly(&self, index: usize) -> Option<bool> {
        self.answers[index].map(|o| self.topics[index].check.options[o].correct)
    }

    pub fn correct_count(&self) -> usize {
        (0..self.topics.len())
            .filter(|&i| self.answered_correctly(i) == Some(true))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CheckOption, SafetyCheck};

    fn topics(n: usize) -> Vec<SafetyTopic> {
        (0..n)
            .map(|i| SafetyTopic {
                short_title: format!("t{i}"),
                title: format!("topic {i}"),
                emoji: "🛡️".to_string(),
                intro: "intro".to_string(),
                rules: Vec::new(),
                do_examples: Vec::new(),
                dont_examples: Vec::new(),
                check: SafetyCheck {
                    question: "?".to_string(),
                    options: vec![
                        CheckOption {
                            emoji: "❌".to_string(),
                            text: "wrong".to_string(),
                            correct: false,
                        },
                        CheckOption {
                            emoji: "✅".to_string(),
                            text: "right".to_string(),
                            correct: true,
                        },
                    ],
                    explanation: "why".to_string(),
                },
            })
            .collect()
    }

    #[test]
    fn correct_first_answer_awards_a_star() {
        let mut browser = SafetyBrowser::new(topics(5));
        let mut tracker = ScoreTracker::new();
        assert!(browser.answer(1, &mut tracker));
        assert_eq!(tracker.stars(), 1);
        assert_eq!(browser.answered_correctly(0), Some(true));
    }

    #[test]
    fn wrong_first_answer_is_final_for_the_session() {
        let mut browser = SafetyBrowser::new(topics(5));
        let mut tracker = ScoreTracker::new();
        assert!(!browser.answer(0, &mut tracker));
        assert_eq!(tracker.stars(), 0);

        // No second chance on the same topic, even with the right option.
        assert!(!browser.answer(1, &mut tracker));
        assert_eq!(browser.picked(0), Some(0));
        assert_eq!(tracker.stars(), 0);
    }

    #[test]
    fn each_topic_awards_independently() {
        let mut browser = SafetyBrowser::new(topics(5));
        let mut tracker = ScoreTracker::new();
        for i in 0..5 {
            browser.goto(i);
            browser.answer(1, &mut tracker);
        }
        assert_eq!(tracker.stars(), 5);
        assert_eq!(browser.correct_count(), 5);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut browser = SafetyBrowser::new(topics(3));
        browser.prev();
        assert_eq!(browser.current(), 0);
        for _ in 0..5 {
            browser.next();
        }
        assert_eq!(browser.current(), 2);
    }
}
