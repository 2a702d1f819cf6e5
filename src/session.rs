use crate::content::ContentPack;
use crate::games::score::{ScoreTracker, SessionSummary};
use crate::learn::{LessonBrowser, SafetyBrowser};

/// Everything a kid-mode visit owns: the star counter, the lesson and
/// safety browsers, and the log of finished games. Created fresh on entry
/// and dropped on exit; nothing here survives leaving kid mode.
pub struct KidSession {
    pub stars: ScoreTracker,
    pub lessons: LessonBrowser,
    pub safety: SafetyBrowser,
    pub log: Vec<SessionSummary>,
    star_goal: u32,
}

impl KidSession {
    pub fn new(pack: &ContentPack) -> Self {
        Self {
            stars: ScoreTracker::new(),
            lessons: LessonBrowser::new(pack.lessons.clone()),
            safety: SafetyBrowser::new(pack.safety_topics.clone()),
            log: Vec::new(),
            star_goal: pack.star_goal(),
        }
    }

    pub fn star_goal(&self) -> u32 {
        self.star_goal
    }

    pub fn record(&mut self, summary: SessionSummary) {
        self.log.push(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_starts_empty() {
        let pack = ContentPack::load().unwrap();
        let session = KidSession::new(&pack);
        assert_eq!(session.stars.stars(), 0);
        assert_eq!(session.star_goal(), 12);
        assert!(session.log.is_empty());
        assert_eq!(session.lessons.completed_count(), 0);
        assert_eq!(session.safety.correct_count(), 0);
    }
}
