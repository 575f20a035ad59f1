//! Runtime configuration for the simulator.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::simulation::Quantize;

/// Default upload size limit (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

const ENV_MAX_UPLOAD_BYTES: &str = "CHROMASIGHT_MAX_UPLOAD_BYTES";
const ENV_WORKERS: &str = "CHROMASIGHT_WORKERS";
const ENV_QUANTIZE: &str = "CHROMASIGHT_QUANTIZE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: u64,
    /// Worker threads for the transform. 0 = available parallelism.
    pub workers: usize,
    /// Float-to-byte conversion for simulated channels.
    pub quantize: Quantize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            workers: 0,
            quantize: Quantize::Round,
        }
    }
}

impl SimulatorConfig {
    /// Defaults overridden by `CHROMASIGHT_*` environment variables.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SimulatorConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            max_upload_bytes: lookup(ENV_MAX_UPLOAD_BYTES)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
            workers: lookup(ENV_WORKERS)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.workers),
            quantize: lookup(ENV_QUANTIZE)
                .and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
                    "round" => Some(Quantize::Round),
                    "truncate" => Some(Quantize::Truncate),
                    _ => None,
                })
                .unwrap_or(defaults.quantize),
        }
    }

    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))
    }
}
