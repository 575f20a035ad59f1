//! The simulator flow: upload an image, pick a deficiency, compare.

use chromasight_core::config::SimulatorConfig;
use chromasight_core::image::RgbaBuffer;
use chromasight_core::simulation::{DeficiencyKind, simulate_parallel};

use crate::error::MediaError;
use crate::loader::{decode_image, encode_png, validate_upload};

/// Where the simulator flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorStage {
    AwaitingUpload,
    AwaitingSelection,
    Comparing,
}

/// The original image next to its simulated rendering.
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    pub kind: DeficiencyKind,
    pub original: &'a RgbaBuffer,
    pub simulated: &'a RgbaBuffer,
}

impl Comparison<'_> {
    /// Heading for the simulated side, e.g. "Protanopia Simulation".
    pub fn heading(&self) -> String {
        format!("{} Simulation", self.kind.label())
    }

    pub fn simulated_png(&self) -> Result<Vec<u8>, MediaError> {
        encode_png(self.simulated)
    }
}

#[derive(Debug, Clone)]
pub struct SimulatorSession {
    config: SimulatorConfig,
    original: Option<RgbaBuffer>,
    simulated: Option<(DeficiencyKind, RgbaBuffer)>,
}

impl Default for SimulatorSession {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl SimulatorSession {
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            config,
            original: None,
            simulated: None,
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn stage(&self) -> SimulatorStage {
        match (&self.original, &self.simulated) {
            (None, _) => SimulatorStage::AwaitingUpload,
            (Some(_), None) => SimulatorStage::AwaitingSelection,
            (Some(_), Some(_)) => SimulatorStage::Comparing,
        }
    }

    pub fn original(&self) -> Option<&RgbaBuffer> {
        self.original.as_ref()
    }

    pub fn selected_kind(&self) -> Option<DeficiencyKind> {
        self.simulated.as_ref().map(|(kind, _)| *kind)
    }

    /// Validate and decode an upload. Replaces any previous image and
    /// clears the selected deficiency.
    pub fn upload(&mut self, bytes: &[u8], mime: &str) -> Result<(), MediaError> {
        validate_upload(mime, bytes.len() as u64, self.config.max_upload_bytes)?;
        let image = decode_image(bytes)?;
        self.load(image);
        Ok(())
    }

    /// Use an already-decoded image.
    pub fn load(&mut self, image: RgbaBuffer) {
        tracing::debug!(width = image.width(), height = image.height(), "image loaded");
        self.original = Some(image);
        self.simulated = None;
    }

    /// Simulate `kind` over the current image.
    pub fn select(&mut self, kind: DeficiencyKind) -> Result<(), MediaError> {
        let original = self.original.as_ref().ok_or(MediaError::NoImage)?;
        if self.selected_kind() == Some(kind) {
            return Ok(());
        }
        let simulated = simulate_parallel(original, kind, self.config.quantize, self.config.workers);
        self.simulated = Some((kind, simulated));
        Ok(())
    }

    pub fn compare(&self) -> Result<Comparison<'_>, MediaError> {
        let original = self.original.as_ref().ok_or(MediaError::NoImage)?;
        let (kind, simulated) = self
            .simulated
            .as_ref()
            .ok_or(MediaError::NoDeficiencySelected)?;
        Ok(Comparison {
            kind: *kind,
            original,
            simulated,
        })
    }

    /// Drop the image and selection.
    pub fn clear(&mut self) {
        self.original = None;
        self.simulated = None;
    }
}
