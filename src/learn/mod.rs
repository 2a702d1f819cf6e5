pub mod guide;
pub mod lessons;
pub mod safety;

pub use guide::GuideBrowser;
pub use lessons::LessonBrowser;
pub use safety::SafetyBrowser;
