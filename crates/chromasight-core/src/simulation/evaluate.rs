//! Per-pixel evaluation: model, clamp, quantize.

use glam::UVec3;
use serde::{Deserialize, Serialize};

use super::kind::DeficiencyKind;
use super::matrix::{SCALE, SimulationModel};
use crate::image::Pixel;

/// How an exact channel value becomes a byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantize {
    /// Round to nearest, halves up.
    #[default]
    Round,
    /// Drop the fractional part.
    Truncate,
}

impl Quantize {
    /// Convert a channel value in thousandths to a byte, clamped to 255.
    #[inline]
    pub fn channel(self, thousandths: u32) -> u8 {
        let value = match self {
            Self::Round => (thousandths + SCALE / 2) / SCALE,
            Self::Truncate => thousandths / SCALE,
        };
        value.min(255) as u8
    }
}

/// Evaluate one pixel against a pre-resolved model. Alpha passes through.
#[inline]
pub fn evaluate_pixel(px: Pixel, model: &SimulationModel, quantize: Quantize) -> Pixel {
    if model.is_identity() {
        return px;
    }
    let rgb = UVec3::new(px[0] as u32, px[1] as u32, px[2] as u32);
    let out = model.map(rgb);
    [
        quantize.channel(out.x),
        quantize.channel(out.y),
        quantize.channel(out.z),
        px[3],
    ]
}

/// Simulate a single pixel under `kind` with default rounding.
pub fn simulate_pixel(px: Pixel, kind: DeficiencyKind) -> Pixel {
    evaluate_pixel(px, &SimulationModel::for_kind(kind), Quantize::default())
}
