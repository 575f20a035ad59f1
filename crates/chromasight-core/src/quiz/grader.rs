//! Quiz scoring and result bucketing.

use serde::{Deserialize, Serialize};

use super::plates::{PLATES, Plate};
use crate::error::CoreError;

/// Accuracy at or above which vision is reported as normal.
pub const NORMAL_THRESHOLD: f64 = 90.0;
/// Accuracy at or above which a mild deficiency is reported.
pub const MILD_THRESHOLD: f64 = 60.0;

/// Qualitative screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultBucket {
    Normal,
    MildDeficiency,
    RedGreenDeficiency,
}

impl ResultBucket {
    /// Bucket an accuracy percentage. Both thresholds are inclusive.
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= NORMAL_THRESHOLD {
            Self::Normal
        } else if accuracy >= MILD_THRESHOLD {
            Self::MildDeficiency
        } else {
            Self::RedGreenDeficiency
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Normal => "Normal Color Vision",
            Self::MildDeficiency => "Possible Mild Color Vision Deficiency",
            Self::RedGreenDeficiency => "Possible Red-Green Color Vision Deficiency",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Normal => {
                "Your results indicate normal color vision. You correctly identified most of the plates."
            }
            Self::MildDeficiency => {
                "Your results suggest you may have a mild color vision deficiency. We recommend \
                 consulting an eye care professional for a comprehensive evaluation."
            }
            Self::RedGreenDeficiency => {
                "Your results indicate a possible red-green color vision deficiency. Please consult \
                 an ophthalmologist or optometrist for a professional diagnosis."
            }
        }
    }
}

/// How one plate was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlateOutcome {
    pub plate_id: u32,
    /// `None` when the plate was left unanswered.
    pub answer: Option<String>,
    pub correct_answer: &'static str,
    pub correct: bool,
}

/// Result of grading one answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub correct_count: usize,
    pub total: usize,
    /// Percentage in `[0, 100]`.
    pub accuracy: f64,
    pub bucket: ResultBucket,
    pub outcomes: Vec<PlateOutcome>,
}

impl GradeReport {
    /// Accuracy rounded to a whole percent for display.
    pub fn accuracy_percent(&self) -> u32 {
        self.accuracy.round() as u32
    }
}

/// Grade `answers` against `plates`, position by position.
///
/// Matching is exact and case-sensitive; an empty answer never matches.
pub fn grade<S: AsRef<str>>(answers: &[S], plates: &[Plate]) -> Result<GradeReport, CoreError> {
    if answers.len() != plates.len() {
        return Err(CoreError::InvalidAnswerSetLength {
            expected: plates.len(),
            actual: answers.len(),
        });
    }

    let outcomes: Vec<PlateOutcome> = answers
        .iter()
        .zip(plates)
        .map(|(answer, plate)| {
            let answer = answer.as_ref();
            PlateOutcome {
                plate_id: plate.id,
                answer: (!answer.is_empty()).then(|| answer.to_string()),
                correct_answer: plate.correct_answer,
                correct: plate.is_correct(answer),
            }
        })
        .collect();

    let correct_count = outcomes.iter().filter(|o| o.correct).count();
    let total = plates.len();
    // Multiply before dividing so 6/10 lands on exactly 60.0.
    let accuracy = if total == 0 {
        0.0
    } else {
        (correct_count as f64 * 100.0) / total as f64
    };
    let bucket = ResultBucket::from_accuracy(accuracy);

    tracing::debug!(correct_count, total, accuracy, ?bucket, "graded answer set");

    Ok(GradeReport {
        correct_count,
        total,
        accuracy,
        bucket,
        outcomes,
    })
}

/// Grade against the built-in plate table.
pub fn grade_standard<S: AsRef<str>>(answers: &[S]) -> Result<GradeReport, CoreError> {
    grade(answers, &PLATES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::plates::answer_key;

    fn with_correct(n: usize) -> Vec<&'static str> {
        answer_key()
            .iter()
            .enumerate()
            .map(|(i, a)| if i < n { *a } else { "Can't see" })
            .collect()
    }

    #[test]
    fn test_all_correct_is_normal() {
        let report = grade_standard(&answer_key()).unwrap();
        assert_eq!(report.correct_count, 10);
        assert_eq!(report.accuracy, 100.0);
        assert_eq!(report.bucket, ResultBucket::Normal);
    }

    #[test]
    fn test_all_empty_is_red_green() {
        let report = grade_standard(&[""; 10]).unwrap();
        assert_eq!(report.correct_count, 0);
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.bucket, ResultBucket::RedGreenDeficiency);
        assert!(report.outcomes.iter().all(|o| o.answer.is_none()));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let six = grade_standard(&with_correct(6)).unwrap();
        assert_eq!(six.accuracy, 60.0);
        assert_eq!(six.bucket, ResultBucket::MildDeficiency);

        let nine = grade_standard(&with_correct(9)).unwrap();
        assert_eq!(nine.accuracy, 90.0);
        assert_eq!(nine.bucket, ResultBucket::Normal);

        let five = grade_standard(&with_correct(5)).unwrap();
        assert_eq!(five.bucket, ResultBucket::RedGreenDeficiency);

        let eight = grade_standard(&with_correct(8)).unwrap();
        assert_eq!(eight.bucket, ResultBucket::MildDeficiency);
    }

    #[test]
    fn test_matching_is_case_and_whitespace_sensitive() {
        let mut answers: Vec<String> = answer_key().iter().map(|s| s.to_string()).collect();
        answers[0] = " 12".to_string();
        let report = grade_standard(&answers).unwrap();
        assert_eq!(report.correct_count, 9);
        assert!(!report.outcomes[0].correct);
        assert_eq!(report.outcomes[0].answer.as_deref(), Some(" 12"));
    }

    #[test]
    fn test_length_mismatch_fails() {
        let err = grade_standard(&["12", "8"]).unwrap_err();
        assert_eq!(err, CoreError::InvalidAnswerSetLength { expected: 10, actual: 2 });
        let err = grade_standard(&[""; 11]).unwrap_err();
        assert_eq!(err, CoreError::InvalidAnswerSetLength { expected: 10, actual: 11 });
    }

    #[test]
    fn test_from_accuracy_thresholds() {
        assert_eq!(ResultBucket::from_accuracy(89.999), ResultBucket::MildDeficiency);
        assert_eq!(ResultBucket::from_accuracy(59.999), ResultBucket::RedGreenDeficiency);
        assert_eq!(ResultBucket::from_accuracy(100.0), ResultBucket::Normal);
    }

    #[test]
    fn test_bucket_serializes_kebab_case() {
        let json = serde_json::to_string(&ResultBucket::RedGreenDeficiency).unwrap();
        assert_eq!(json, "\"red-green-deficiency\"");
    }

    #[test]
    fn test_empty_plate_table() {
        let answers: [&str; 0] = [];
        let report = grade(&answers, &[]).unwrap();
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.accuracy_percent(), 0);
    }
}
