#![forbid(unsafe_code)]

pub mod assessment;
pub mod error;
pub mod model;
pub mod time;
pub mod tracker;

pub use assessment::{Advance, AssessmentEngine, AssessmentError, QuizPhase, QuizState};
pub use error::Error;
pub use time::Clock;
pub use tracker::SectionTracker;
