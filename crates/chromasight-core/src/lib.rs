//! Chromasight Core — domain layer for color vision simulation and screening.
//!
//! This crate contains the deficiency simulation matrices, the image
//! transform engine, and the Ishihara quiz grader. No codec dependencies.

pub mod config;
pub mod error;
pub mod image;
pub mod quiz;
pub mod simulation;

// Re-exports for convenience.
pub use config::SimulatorConfig;
pub use error::CoreError;
pub use image::{Pixel, RgbaBuffer};
pub use quiz::{GradeReport, QuizSession, ResultBucket, grade, grade_standard};
pub use simulation::{DeficiencyKind, Quantize, simulate, simulate_parallel, simulate_raw};
