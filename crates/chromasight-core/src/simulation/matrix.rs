//! Simulation matrices and the per-kind model lookup table.
//!
//! Every coefficient has three decimals, so matrices are stored as integer
//! thousandths and evaluated exactly. A channel result is the real value
//! scaled by [`SCALE`].

use glam::UVec3;

use super::kind::DeficiencyKind;

/// Fixed-point scale of every coefficient.
pub const SCALE: u32 = 1000;

/// A 3x3 color matrix in row-major thousandths: `out[i] = dot(rows[i], rgb)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMatrix(pub [[u32; 3]; 3]);

impl ColorMatrix {
    pub fn rows(&self) -> [UVec3; 3] {
        self.0.map(UVec3::from)
    }
}

/// Red-blind simulation.
pub const PROTANOPIA: ColorMatrix = ColorMatrix([
    [567, 433, 0],
    [558, 442, 0],
    [0, 242, 758],
]);

/// Green-blind simulation.
pub const DEUTERANOPIA: ColorMatrix = ColorMatrix([
    [625, 375, 0],
    [700, 300, 0],
    [0, 300, 700],
]);

/// Blue-blind simulation.
pub const TRITANOPIA: ColorMatrix = ColorMatrix([
    [950, 50, 0],
    [0, 433, 567],
    [0, 475, 525],
]);

/// Rec. 601 luma weights, in thousandths, for the achromatopsia collapse.
pub const LUMA_REC601: [u32; 3] = [299, 587, 114];

/// How one kind maps an RGB triplet. Resolved once per image, not per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationModel {
    /// Output equals input.
    Identity,
    /// General linear transform, one row per output channel.
    Matrix([UVec3; 3]),
    /// Every channel becomes `dot(weights, rgb)`.
    Luminance(UVec3),
}

impl SimulationModel {
    /// Lookup table from deficiency kind to its model.
    pub fn for_kind(kind: DeficiencyKind) -> Self {
        match kind {
            DeficiencyKind::None => Self::Identity,
            DeficiencyKind::Protanopia => Self::Matrix(PROTANOPIA.rows()),
            DeficiencyKind::Deuteranopia => Self::Matrix(DEUTERANOPIA.rows()),
            DeficiencyKind::Tritanopia => Self::Matrix(TRITANOPIA.rows()),
            DeficiencyKind::Achromatopsia => Self::Luminance(UVec3::from(LUMA_REC601)),
        }
    }

    /// Map an RGB triplet to channel values scaled by [`SCALE`].
    /// Rows are non-negative and sum to [`SCALE`], so nothing overflows.
    #[inline]
    pub fn map(&self, rgb: UVec3) -> UVec3 {
        match self {
            Self::Identity => rgb * SCALE,
            Self::Matrix([r, g, b]) => UVec3::new(r.dot(rgb), g.dot(rgb), b.dot(rgb)),
            Self::Luminance(weights) => UVec3::splat(weights.dot(rgb)),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_rows_sum_to_scale() {
        for m in [PROTANOPIA, DEUTERANOPIA, TRITANOPIA] {
            for row in m.0 {
                assert_eq!(row.iter().sum::<u32>(), SCALE, "row {row:?}");
            }
        }
        assert_eq!(LUMA_REC601.iter().sum::<u32>(), SCALE);
    }

    #[test]
    fn test_map_uses_row_major_coefficients() {
        let model = SimulationModel::for_kind(DeficiencyKind::Protanopia);
        assert_eq!(model.map(UVec3::new(100, 0, 0)), UVec3::new(56_700, 55_800, 0));

        let model = SimulationModel::for_kind(DeficiencyKind::Tritanopia);
        assert_eq!(model.map(UVec3::new(0, 0, 100)), UVec3::new(0, 56_700, 52_500));
    }

    #[test]
    fn test_luminance_model_is_gray() {
        let model = SimulationModel::for_kind(DeficiencyKind::Achromatopsia);
        let out = model.map(UVec3::new(200, 30, 90));
        assert_eq!(out, UVec3::splat(59_800 + 17_610 + 10_260));
    }

    #[test]
    fn test_white_maps_to_full_scale() {
        for kind in DeficiencyKind::all() {
            let out = SimulationModel::for_kind(*kind).map(UVec3::splat(255));
            assert_eq!(out, UVec3::splat(255 * SCALE), "{kind}");
        }
    }

    #[test]
    fn test_none_resolves_to_identity() {
        assert!(SimulationModel::for_kind(DeficiencyKind::None).is_identity());
        assert!(!SimulationModel::for_kind(DeficiencyKind::Protanopia).is_identity());
    }
}
