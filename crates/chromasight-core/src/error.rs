//! Error type shared by the simulation engine and the quiz.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid image buffer: {len} bytes does not describe a {width}x{height} RGBA image")]
    InvalidImageBuffer { width: u32, height: u32, len: usize },
    #[error("answer set has {actual} entries, expected {expected}")]
    InvalidAnswerSetLength { expected: usize, actual: usize },
    #[error("cannot {operation} while the quiz is in the {stage} stage")]
    InvalidStage {
        operation: &'static str,
        stage: &'static str,
    },
    #[error("no answer selected for the current plate")]
    NoSelection,
    #[error("\"{option}\" is not an option for the current plate")]
    UnknownOption { option: String },
    #[error("invalid configuration: {0}")]
    Config(String),
}
