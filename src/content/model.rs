use serde::Deserialize;

/// One multiple-choice quiz question. `correct` indexes into `options`.
#[derive(Clone, Debug, Deserialize)]
pub struct Question {
    pub emoji: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

/// A term and its definition. The canonical definition for the pair at
/// position i is the definition at position i; display order is shuffled
/// separately and never changes identity.
#[derive(Clone, Debug, Deserialize)]
pub struct TermPair {
    pub emoji: String,
    pub term: String,
    pub definition: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SortableItem {
    pub emoji: String,
    pub label: String,
    pub safe: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub emoji: String,
    pub intro: String,
    pub sections: Vec<LessonSection>,
    pub try_it: Option<TryIt>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LessonSection {
    pub emoji: String,
    pub heading: String,
    pub text: String,
    pub example: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TryIt {
    pub prompt: String,
    pub activity: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SafetyTopic {
    pub short_title: String,
    pub title: String,
    pub emoji: String,
    pub intro: String,
    pub rules: Vec<SafetyRule>,
    pub do_examples: Vec<String>,
    pub dont_examples: Vec<String>,
    pub check: SafetyCheck,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SafetyRule {
    pub emoji: String,
    pub title: String,
    pub description: String,
}

/// One-shot quick-check question at the end of a safety topic.
#[derive(Clone, Debug, Deserialize)]
pub struct SafetyCheck {
    pub question: String,
    pub options: Vec<CheckOption>,
    pub explanation: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CheckOption {
    pub emoji: String,
    pub text: String,
    pub correct: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GuideSection {
    pub title: String,
    pub tagline: String,
    pub topics: Vec<GuideTopic>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GuideTopic {
    pub emoji: String,
    pub title: String,
    pub body: String,
    pub points: Vec<String>,
}
