use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::content::model::{GuideSection, Lesson, Question, SafetyTopic, SortableItem, TermPair};

const QUIZ_JSON: &str = include_str!("../../assets/content/quiz.json");
const PAIRS_JSON: &str = include_str!("../../assets/content/pairs.json");
const SORTING_JSON: &str = include_str!("../../assets/content/sorting.json");
const LESSONS_JSON: &str = include_str!("../../assets/content/lessons.json");
const SAFETY_JSON: &str = include_str!("../../assets/content/safety.json");
const GUIDE_JSON: &str = include_str!("../../assets/content/guide.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {asset}: {source}")]
    Parse {
        asset: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{asset} is empty")]
    Empty { asset: &'static str },
    #[error("question {index} has answer index {answer} but only {options} options")]
    AnswerOutOfRange {
        index: usize,
        answer: usize,
        options: usize,
    },
    #[error("safety topic {index} must have exactly one correct option, found {found}")]
    BadCheckOptions { index: usize, found: usize },
}

/// All static content compiled into the binary. Loaded once at startup and
/// only ever read afterwards; every session borrows or clones from it.
pub struct ContentPack {
    pub questions: Vec<Question>,
    pub pairs: Vec<TermPair>,
    pub sort_items: Vec<SortableItem>,
    pub lessons: Vec<Lesson>,
    pub safety_topics: Vec<SafetyTopic>,
    pub guide_sections: Vec<GuideSection>,
}

impl ContentPack {
    pub fn load() -> Result<Self, ContentError> {
        let pack = Self {
            questions: parse(QUIZ_JSON, "quiz.json")?,
            pairs: parse(PAIRS_JSON, "pairs.json")?,
            sort_items: parse(SORTING_JSON, "sorting.json")?,
            lessons: parse(LESSONS_JSON, "lessons.json")?,
            safety_topics: parse(SAFETY_JSON, "safety.json")?,
            guide_sections: parse(GUIDE_JSON, "guide.json")?,
        };
        pack.validate()?;
        Ok(pack)
    }

    /// Total stars obtainable in one kid session: one per lesson, one per
    /// safety quick-check, one per game.
    pub fn star_goal(&self) -> u32 {
        (self.lessons.len() + self.safety_topics.len() + crate::games::GameKind::ALL.len()) as u32
    }

    fn validate(&self) -> Result<(), ContentError> {
        for (index, q) in self.questions.iter().enumerate() {
            if q.correct >= q.options.len() {
                return Err(ContentError::AnswerOutOfRange {
                    index,
                    answer: q.correct,
                    options: q.options.len(),
                });
            }
        }
        for (index, topic) in self.safety_topics.iter().enumerate() {
            let found = topic.check.options.iter().filter(|o| o.correct).count();
            if found != 1 {
                return Err(ContentError::BadCheckOptions { index, found });
            }
        }
        Ok(())
    }
}

fn parse<T: DeserializeOwned>(json: &str, asset: &'static str) -> Result<Vec<T>, ContentError> {
    let items: Vec<T> =
        serde_json::from_str(json).map_err(|source| ContentError::Parse { asset, source })?;
    if items.is_empty() {
        return Err(ContentError::Empty { asset });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_loads_and_validates() {
        let pack = ContentPack::load().expect("bundled content must parse");
        assert_eq!(pack.questions.len(), 5);
        assert_eq!(pack.pairs.len(), 5);
        assert_eq!(pack.sort_items.len(), 10);
        assert_eq!(pack.lessons.len(), 4);
        assert_eq!(pack.safety_topics.len(), 5);
        assert_eq!(pack.guide_sections.len(), 4);
    }

    #[test]
    fn every_question_has_four_options_and_valid_answer() {
        let pack = ContentPack::load().unwrap();
        for q in &pack.questions {
            assert_eq!(q.options.len(), 4);
            assert!(q.correct < q.options.len());
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn sorting_items_split_evenly() {
        let pack = ContentPack::load().unwrap();
        let safe = pack.sort_items.iter().filter(|i| i.safe).count();
        assert_eq!(safe, 5);
        assert_eq!(pack.sort_items.len() - safe, 5);
    }

    #[test]
    fn safety_checks_have_one_correct_option() {
        let pack = ContentPack::load().unwrap();
        for topic in &pack.safety_topics {
            assert_eq!(topic.check.options.iter().filter(|o| o.correct).count(), 1);
        }
    }

    #[test]
    fn star_goal_counts_lessons_checks_and_games() {
        let pack = ContentPack::load().unwrap();
        assert_eq!(pack.star_goal(), 12);
    }

    #[test]
    fn answer_out_of_range_is_rejected() {
        let json = r#"[{"emoji":"x","prompt":"p","options":["a","b"],"correct":2,"explanation":"e"}]"#;
        let questions: Vec<Question> = serde_json::from_str(json).unwrap();
        let pack = ContentPack {
            questions,
            pairs: serde_json::from_str(super::PAIRS_JSON).unwrap(),
            sort_items: serde_json::from_str(super::SORTING_JSON).unwrap(),
            lessons: serde_json::from_str(super::LESSONS_JSON).unwrap(),
            safety_topics: serde_json::from_str(super::SAFETY_JSON).unwrap(),
            guide_sections: serde_json::from_str(super::GUIDE_JSON).unwrap(),
        };
        assert!(matches!(
            pack.validate(),
            Err(ContentError::AnswerOutOfRange { index: 0, answer: 2, options: 2 })
        ));
    }
}
