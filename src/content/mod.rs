pub mod model;
pub mod pack;

pub use model::{
    CheckOption, GuideSection, GuideTopic, Lesson, LessonSection, Question, SafetyCheck,
    SafetyRule, SafetyTopic, SortableItem, TermPair, TryIt,
};
pub use pack::{ContentError, ContentPack};
