//! Quiz navigation state: intro, ten plates, results.

use serde::Serialize;

use super::grader::{GradeReport, grade};
use super::plates::{PLATES, Plate};
use crate::error::CoreError;

/// Top-level stage of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStage {
    Intro,
    Testing,
    Results,
}

impl TestStage {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Testing => "testing",
            Self::Results => "results",
        }
    }
}

/// What [`QuizSession::next`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved to the plate at this index.
    Question(usize),
    /// The last plate was answered and graded.
    Finished(GradeReport),
}

/// One run through the quiz over a fixed plate table.
#[derive(Debug, Clone)]
pub struct QuizSession {
    plates: &'static [Plate],
    stage: TestStage,
    current: usize,
    answers: Vec<String>,
    selected: String,
    report: Option<GradeReport>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(&PLATES)
    }
}

impl QuizSession {
    pub fn new(plates: &'static [Plate]) -> Self {
        Self {
            plates,
            stage: TestStage::Intro,
            current: 0,
            answers: vec![String::new(); plates.len()],
            selected: String::new(),
            report: None,
        }
    }

    pub fn stage(&self) -> TestStage {
        self.stage
    }

    /// Index of the plate being shown.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_plate(&self) -> Option<&'static Plate> {
        match self.stage {
            TestStage::Testing => self.plates.get(self.current),
            _ => None,
        }
    }

    /// The option currently highlighted, if any.
    pub fn selected(&self) -> Option<&str> {
        (!self.selected.is_empty()).then_some(self.selected.as_str())
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// The graded report, once the session reaches [`TestStage::Results`].
    pub fn report(&self) -> Option<&GradeReport> {
        self.report.as_ref()
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.plates.len()
    }

    /// Percentage of plates reached, counting the current one.
    pub fn progress(&self) -> f64 {
        if self.plates.is_empty() {
            return 0.0;
        }
        ((self.current + 1) as f64 * 100.0) / self.plates.len() as f64
    }

    /// Intro → Testing, with every answer cleared.
    pub fn start(&mut self) -> Result<(), CoreError> {
        self.expect_stage(TestStage::Intro, "start")?;
        self.reset_answers();
        self.stage = TestStage::Testing;
        tracing::debug!(plates = self.plates.len(), "quiz started");
        Ok(())
    }

    /// Highlight `option` on the current plate without storing it.
    pub fn select(&mut self, option: &str) -> Result<(), CoreError> {
        self.expect_stage(TestStage::Testing, "select an answer")?;
        let known = self
            .plates
            .get(self.current)
            .is_some_and(|plate| plate.has_option(option));
        if !known {
            return Err(CoreError::UnknownOption {
                option: option.to_string(),
            });
        }
        self.selected = option.to_string();
        Ok(())
    }

    /// Store the selection and move on. Grades the answers after the last plate.
    pub fn next(&mut self) -> Result<Advance, CoreError> {
        self.expect_stage(TestStage::Testing, "advance")?;
        if self.selected.is_empty() {
            return Err(CoreError::NoSelection);
        }
        self.answers[self.current] = std::mem::take(&mut self.selected);

        if !self.is_last_question() {
            self.current += 1;
            self.selected = self.answers[self.current].clone();
            return Ok(Advance::Question(self.current));
        }

        let report = grade(&self.answers, self.plates)?;
        self.stage = TestStage::Results;
        self.report = Some(report.clone());
        tracing::debug!(bucket = ?report.bucket, "quiz finished");
        Ok(Advance::Finished(report))
    }

    /// Step back one plate, restoring its stored answer as the selection.
    /// The current selection is not stored. No-op on the first plate.
    pub fn previous(&mut self) -> Result<usize, CoreError> {
        self.expect_stage(TestStage::Testing, "go back")?;
        if self.current > 0 {
            self.current -= 1;
            self.selected = self.answers[self.current].clone();
        }
        Ok(self.current)
    }

    /// Discard all answers and return to the intro.
    pub fn retake(&mut self) {
        self.reset_answers();
        self.stage = TestStage::Intro;
    }

    fn reset_answers(&mut self) {
        self.current = 0;
        self.selected.clear();
        self.answers.iter_mut().for_each(String::clear);
        self.report = None;
    }

    fn expect_stage(&self, stage: TestStage, operation: &'static str) -> Result<(), CoreError> {
        if self.stage != stage {
            return Err(CoreError::InvalidStage {
                operation,
                stage: self.stage.name(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::grader::ResultBucket;

    #[test]
    fn test_starts_at_intro() {
        let session = QuizSession::default();
        assert_eq!(session.stage(), TestStage::Intro);
        assert!(session.current_plate().is_none());
        assert_eq!(session.answers().len(), 10);
    }

    #[test]
    fn test_select_requires_testing_stage() {
        let mut session = QuizSession::default();
        let err = session.select("12").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidStage { operation: "select an answer", stage: "intro" }
        );
    }

    #[test]
    fn test_next_requires_selection() {
        let mut session = QuizSession::default();
        session.start().unwrap();
        assert_eq!(session.next().unwrap_err(), CoreError::NoSelection);
    }

    #[test]
    fn test_select_rejects_foreign_option() {
        let mut session = QuizSession::default();
        session.start().unwrap();
        assert!(matches!(
            session.select("74"),
            Err(CoreError::UnknownOption { .. })
        ));
        session.select("Can't see").unwrap();
        assert_eq!(session.selected(), Some("Can't see"));
    }

    #[test]
    fn test_previous_restores_stored_answer() {
        let mut session = QuizSession::default();
        session.start().unwrap();
        session.select("13").unwrap();
        assert_eq!(session.next().unwrap(), Advance::Question(1));
        assert_eq!(session.selected(), None);

        session.select("3").unwrap();
        assert_eq!(session.previous().unwrap(), 0);
        assert_eq!(session.selected(), Some("13"));
        // Going back does not store the pending selection.
        assert_eq!(session.answers()[1], "");
    }

    #[test]
    fn test_previous_on_first_plate_is_noop() {
        let mut session = QuizSession::default();
        session.start().unwrap();
        assert_eq!(session.previous().unwrap(), 0);
    }

    #[test]
    fn test_progress() {
        let mut session = QuizSession::default();
        session.start().unwrap();
        assert_eq!(session.progress(), 10.0);
        session.select("12").unwrap();
        session.next().unwrap();
        assert_eq!(session.progress(), 20.0);
    }

    #[test]
    fn test_full_run_and_retake() {
        let mut session = QuizSession::default();
        session.start().unwrap();
        let mut finished = None;
        for plate in PLATES.iter() {
            session.select(plate.correct_answer).unwrap();
            if let Advance::Finished(report) = session.next().unwrap() {
                finished = Some(report);
            }
        }
        let report = finished.expect("last plate should finish the quiz");
        assert_eq!(report.bucket, ResultBucket::Normal);
        assert_eq!(session.stage(), TestStage::Results);
        assert_eq!(session.report(), Some(&report));
        assert!(session.next().is_err());

        session.retake();
        assert_eq!(session.stage(), TestStage::Intro);
        assert!(session.answers().iter().all(String::is_empty));
        assert!(session.report().is_none());
    }
}
