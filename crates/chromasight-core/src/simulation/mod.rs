//! Color vision deficiency simulation — kinds, matrices, and the transform engine.

pub mod engine;
pub mod evaluate;
pub mod kind;
pub mod matrix;

pub use engine::{simulate, simulate_in_place, simulate_parallel, simulate_raw, simulate_with};
pub use evaluate::{Quantize, simulate_pixel};
pub use kind::{Cone, DeficiencyKind};
pub use matrix::{ColorMatrix, SimulationModel};
