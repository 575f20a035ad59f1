//! Deficiency kinds and their display metadata.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

/// The category of simulated color vision deficiency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeficiencyKind {
    /// Normal vision. The transform is the identity.
    #[default]
    None,
    /// Red-blind (missing L cones).
    Protanopia,
    /// Green-blind (missing M cones).
    Deuteranopia,
    /// Blue-blind (missing S cones).
    Tritanopia,
    /// Complete color blindness.
    Achromatopsia,
}

/// The cone class a deficiency weakens, for the cone response diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cone {
    /// Long-wavelength (red) cones.
    L,
    /// Medium-wavelength (green) cones.
    M,
    /// Short-wavelength (blue) cones.
    S,
    /// Every cone class.
    All,
}

impl Cone {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::L => "L (Red)",
            Self::M => "M (Green)",
            Self::S => "S (Blue)",
            Self::All => "All",
        }
    }

    /// Accent color used when highlighting this cone's response curve.
    pub const fn accent(&self) -> Srgb<u8> {
        match self {
            Self::L => Srgb::new(0xef, 0x44, 0x44),
            Self::M => Srgb::new(0x22, 0xc5, 0x5e),
            Self::S => Srgb::new(0x3b, 0x82, 0xf6),
            Self::All => Srgb::new(0x6b, 0x72, 0x80),
        }
    }

    /// Accent color as a `#rrggbb` string.
    pub fn accent_hex(&self) -> String {
        let c = self.accent();
        format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
    }
}

impl DeficiencyKind {
    /// The four simulated deficiencies, in selector order.
    pub fn all() -> &'static [Self] {
        const ALL: [DeficiencyKind; 4] = [
            DeficiencyKind::Protanopia,
            DeficiencyKind::Deuteranopia,
            DeficiencyKind::Tritanopia,
            DeficiencyKind::Achromatopsia,
        ];
        &ALL
    }

    /// Stable identifier, as accepted by [`DeficiencyKind::parse_lossy`].
    pub const fn id(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }

    /// Human-readable label for selectors and comparison headings.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "Normal vision",
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
            Self::Achromatopsia => "Achromatopsia",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::None => "No color vision deficiency. The image is shown unchanged.",
            Self::Protanopia => "Red-blind. Difficulty distinguishing red from green.",
            Self::Deuteranopia => "Green-blind. Most common form of color blindness.",
            Self::Tritanopia => "Blue-blind. Difficulty distinguishing blue from yellow.",
            Self::Achromatopsia => "Complete color blindness. Sees only in grayscale.",
        }
    }

    /// Approximate prevalence, or `None` for normal vision.
    pub const fn prevalence(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Protanopia | Self::Deuteranopia => Some("~1% of males"),
            Self::Tritanopia => Some("~0.001% of population"),
            Self::Achromatopsia => Some("~0.003% of population"),
        }
    }

    /// Which cone class this deficiency weakens.
    pub const fn weakened_cone(&self) -> Option<Cone> {
        match self {
            Self::None => None,
            Self::Protanopia => Some(Cone::L),
            Self::Deuteranopia => Some(Cone::M),
            Self::Tritanopia => Some(Cone::S),
            Self::Achromatopsia => Some(Cone::All),
        }
    }

    /// Parse a kind identifier, falling back to [`DeficiencyKind::None`]
    /// (identity) for anything unrecognised.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(kind = s, "unknown deficiency kind, using identity transform");
            Self::None
        })
    }
}

impl fmt::Display for DeficiencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned by [`DeficiencyKind::from_str`] for unrecognised identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown deficiency kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for DeficiencyKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" | "none" | "normal" => Ok(Self::None),
            "protanopia" => Ok(Self::Protanopia),
            "deuteranopia" => Ok(Self::Deuteranopia),
            "tritanopia" => Ok(Self::Tritanopia),
            "achromatopsia" => Ok(Self::Achromatopsia),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}
