//! Ishihara plate quiz — answer key, grading, and session navigation.

pub mod grader;
pub mod plates;
pub mod session;

pub use grader::{GradeReport, PlateOutcome, ResultBucket, grade, grade_standard};
pub use plates::{CANT_SEE, PLATES, Plate};
pub use session::{Advance, QuizSession, TestStage};
