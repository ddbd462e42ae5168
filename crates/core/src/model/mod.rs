mod ids;
mod question;
mod results;
mod section;
mod settings;

pub use ids::{ParseIdError, SectionId};

pub use question::{Question, QuestionError};
pub use results::{Band, QuestionOutcome, QuizResults};
pub use section::{Section, SectionBoundary, SectionError, SectionOutline};
pub use settings::{BandThresholds, SettingsError, TrackerSettings};
