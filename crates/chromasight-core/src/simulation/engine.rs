//! Whole-image simulation, serial and row-parallel.

use std::num::NonZeroUsize;
use std::thread;

use super::evaluate::{Quantize, evaluate_pixel};
use super::kind::DeficiencyKind;
use super::matrix::SimulationModel;
use crate::error::CoreError;
use crate::image::{Pixel, RgbaBuffer, validate_dimensions};

/// Simulate `kind` over a copy of `image` with default rounding.
pub fn simulate(image: &RgbaBuffer, kind: DeficiencyKind) -> RgbaBuffer {
    simulate_with(image, kind, Quantize::default())
}

/// Simulate `kind` over a copy of `image`.
pub fn simulate_with(image: &RgbaBuffer, kind: DeficiencyKind, quantize: Quantize) -> RgbaBuffer {
    let mut out = image.clone();
    apply(out.pixels_mut(), &SimulationModel::for_kind(kind), quantize);
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        %kind,
        "simulated image"
    );
    out
}

/// Simulate `kind` in place with default rounding.
pub fn simulate_in_place(image: &mut RgbaBuffer, kind: DeficiencyKind) {
    apply(image.pixels_mut(), &SimulationModel::for_kind(kind), Quantize::default());
}

/// Simulate over raw RGBA bytes.
///
/// Fails with [`CoreError::InvalidImageBuffer`] if `data` is not exactly a
/// `width x height` RGBA image. Nothing is written on failure.
pub fn simulate_raw(
    width: u32,
    height: u32,
    data: &[u8],
    kind: DeficiencyKind,
) -> Result<Vec<u8>, CoreError> {
    validate_dimensions(width, height, data.len())?;
    let mut out = data.to_vec();
    let pixels: &mut [Pixel] = bytemuck::cast_slice_mut(&mut out);
    apply(pixels, &SimulationModel::for_kind(kind), Quantize::default());
    Ok(out)
}

/// Simulate `kind` across `workers` threads, each owning a disjoint band
/// of rows. `workers == 0` uses the available parallelism.
///
/// Output is identical to [`simulate_with`].
pub fn simulate_parallel(
    image: &RgbaBuffer,
    kind: DeficiencyKind,
    quantize: Quantize,
    workers: usize,
) -> RgbaBuffer {
    let model = SimulationModel::for_kind(kind);
    let mut out = image.clone();
    if model.is_identity() || out.is_empty() {
        return out;
    }

    let workers = resolve_workers(workers);
    let row_len = image.width() as usize;
    let rows_per_band = (image.height() as usize).div_ceil(workers).max(1);
    let band_len = rows_per_band * row_len;

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        %kind,
        workers,
        rows_per_band,
        "simulating image in parallel"
    );

    if workers == 1 {
        apply(out.pixels_mut(), &model, quantize);
        return out;
    }

    thread::scope(|scope| {
        for band in out.pixels_mut().chunks_mut(band_len) {
            let model = &model;
            scope.spawn(move || apply(band, model, quantize));
        }
    });
    out
}

fn resolve_workers(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn apply(pixels: &mut [Pixel], model: &SimulationModel, quantize: Quantize) {
    if model.is_identity() {
        return;
    }
    for px in pixels {
        *px = evaluate_pixel(*px, model, quantize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> RgbaBuffer {
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let r = (x * 255 / (width - 1).max(1)) as u8;
                let g = (y * 255 / (height - 1).max(1)) as u8;
                pixels.push([r, g, 128, 200]);
            }
        }
        RgbaBuffer::from_pixels(width, height, &pixels).unwrap()
    }

    #[test]
    fn test_none_is_identity() {
        let image = gradient(16, 9);
        assert_eq!(simulate(&image, DeficiencyKind::None), image);
    }

    #[test]
    fn test_dimensions_preserved() {
        let image = gradient(7, 5);
        for kind in DeficiencyKind::all() {
            let out = simulate(&image, *kind);
            assert_eq!(out.width(), 7);
            assert_eq!(out.height(), 5);
            assert_eq!(out.as_bytes().len(), image.as_bytes().len());
        }
    }

    #[test]
    fn test_raw_rejects_bad_length() {
        let err = simulate_raw(2, 2, &[0; 15], DeficiencyKind::Protanopia).unwrap_err();
        assert!(matches!(err, CoreError::InvalidImageBuffer { len: 15, .. }));
        assert!(simulate_raw(3, 2, &[0; 16], DeficiencyKind::Protanopia).is_err());
    }

    #[test]
    fn test_raw_matches_buffer_path() {
        let image = gradient(8, 8);
        let raw = simulate_raw(8, 8, image.as_bytes(), DeficiencyKind::Deuteranopia).unwrap();
        assert_eq!(raw, simulate(&image, DeficiencyKind::Deuteranopia).into_bytes());
    }

    #[test]
    fn test_in_place_matches_copy() {
        let image = gradient(5, 4);
        let mut inplace = image.clone();
        simulate_in_place(&mut inplace, DeficiencyKind::Tritanopia);
        assert_eq!(inplace, simulate(&image, DeficiencyKind::Tritanopia));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let image = gradient(33, 17);
        for kind in DeficiencyKind::all() {
            let serial = simulate(&image, *kind);
            for workers in [0, 1, 3, 8, 64] {
                let parallel = simulate_parallel(&image, *kind, Quantize::Round, workers);
                assert_eq!(parallel, serial, "{kind} with {workers} workers");
            }
        }
    }

    #[test]
    fn test_parallel_empty_image() {
        let image = RgbaBuffer::new(0, 0, vec![]).unwrap();
        let out = simulate_parallel(&image, DeficiencyKind::Achromatopsia, Quantize::Round, 4);
        assert!(out.is_empty());
    }
}
