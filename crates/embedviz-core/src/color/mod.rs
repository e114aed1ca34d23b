//! Color assignment for labeled points.
//!
//! Maps an arbitrary set of labels to one stable, visually distinct color
//! per unique label. The palette draw consumes the explicitly passed RNG,
//! so repeated calls with the same labels and the same seeded RNG produce
//! the same mapping bit for bit.

use std::collections::{BTreeMap, BTreeSet};

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};
use crate::types::Label;

#[cfg(test)]
mod tests;

/// An RGB triple with byte channels.
pub type Rgb = [u8; 3];

/// The "Tableau 20" palette: 20 visually distinct RGB triples.
pub const TABLEAU20: [Rgb; 20] = [
    [31, 119, 180],
    [174, 199, 232],
    [255, 127, 14],
    [255, 187, 120],
    [44, 160, 44],
    [152, 223, 138],
    [214, 39, 40],
    [255, 152, 150],
    [148, 103, 189],
    [197, 176, 213],
    [140, 86, 75],
    [196, 156, 148],
    [227, 119, 194],
    [247, 182, 210],
    [127, 127, 127],
    [199, 199, 199],
    [188, 189, 34],
    [219, 219, 141],
    [23, 190, 207],
    [158, 218, 229],
];

/// How colors are chosen for the unique labels of one visualization call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Draw one palette entry per unique label, without replacement, from
    /// the shared RNG.
    Random {
        /// Palette of distinct colors to draw from.
        palette: Vec<Rgb>,
    },
    /// Caller-supplied mapping. Its key set must equal the unique label set
    /// of the call; validated once at the boundary.
    Explicit(BTreeMap<Label, Rgb>),
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Random {
            palette: TABLEAU20.to_vec(),
        }
    }
}

impl ColorScheme {
    /// Random draw from the default Tableau 20 palette.
    pub fn random() -> Self {
        Self::default()
    }

    /// Random draw from a caller-supplied palette.
    pub fn random_from(palette: Vec<Rgb>) -> Self {
        ColorScheme::Random { palette }
    }

    /// Fixed label-to-color mapping.
    pub fn explicit(mapping: BTreeMap<Label, Rgb>) -> Self {
        ColorScheme::Explicit(mapping)
    }
}

/// The color mapping computed for one visualization call.
///
/// Holds the per-unique-label map and the point-wise expansion over the
/// input labels, and projects both into the scales renderers consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssignment {
    by_label: BTreeMap<Label, Rgb>,
    per_point: Vec<Rgb>,
}

impl ColorAssignment {
    /// Color map keyed by unique label, ascending.
    pub fn by_label(&self) -> &BTreeMap<Label, Rgb> {
        &self.by_label
    }

    /// Color of one label, if it occurred in the input.
    pub fn color_of(&self, label: Label) -> Option<Rgb> {
        self.by_label.get(&label).copied()
    }

    /// One byte-scale RGB triple per input element.
    pub fn per_point(&self) -> &[Rgb] {
        &self.per_point
    }

    /// Point-wise colors scaled to [0.0, 1.0] per channel.
    pub fn per_point_unit(&self) -> Vec<[f32; 3]> {
        self.per_point
            .iter()
            .map(|c| c.map(|v| f32::from(v) / 255.0))
            .collect()
    }

    /// Point-wise colors as `#rrggbb` strings.
    pub fn per_point_hex(&self) -> Vec<String> {
        rgb_to_hex_batch(&self.per_point)
    }
}

/// Assign one color to every input element, keyed by its label.
///
/// Unique labels are taken in ascending order so the palette draw is
/// reproducible under a fixed RNG state. No two labels share a color within
/// one call.
///
/// # Errors
///
/// - `PaletteExhausted` when the unique labels outnumber the palette.
/// - `ColorFormat` when an explicit mapping's keys do not equal the unique
///   label set.
pub fn assign_colors(
    labels: &[Label],
    scheme: &ColorScheme,
    rng: &mut ChaCha8Rng,
) -> VizResult<ColorAssignment> {
    let uniques: BTreeSet<Label> = labels.iter().copied().collect();

    let by_label: BTreeMap<Label, Rgb> = match scheme {
        ColorScheme::Random { palette } => {
            if uniques.len() > palette.len() {
                return Err(VizError::PaletteExhausted {
                    unique: uniques.len(),
                    capacity: palette.len(),
                });
            }
            let picks = rand::seq::index::sample(rng, palette.len(), uniques.len()).into_vec();
            uniques
                .iter()
                .zip(picks)
                .map(|(&label, pick)| (label, palette[pick]))
                .collect()
        }
        ColorScheme::Explicit(mapping) => {
            let keys: BTreeSet<Label> = mapping.keys().copied().collect();
            if keys != uniques {
                return Err(VizError::ColorFormat {
                    input: format!("{:?}", keys),
                    reason: format!("explicit mapping must cover exactly the labels {:?}", uniques),
                });
            }
            mapping.clone()
        }
    };

    let per_point = labels.iter().map(|l| by_label[l]).collect();
    Ok(ColorAssignment { by_label, per_point })
}

/// Format one RGB triple as `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Format a batch of RGB triples as `#rrggbb` strings.
pub fn rgb_to_hex_batch(colors: &[Rgb]) -> Vec<String> {
    colors.iter().map(|&c| rgb_to_hex(c)).collect()
}

/// Parse a `#rgb` or `#rrggbb` string back into an RGB triple.
///
/// # Errors
///
/// `ColorFormat` on any other length or on non-hex digits.
pub fn hex_to_rgb(hex: &str) -> VizResult<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() {
        return Err(VizError::ColorFormat {
            input: hex.to_string(),
            reason: "contains non-ASCII characters".to_string(),
        });
    }
    let component = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| VizError::ColorFormat {
            input: hex.to_string(),
            reason: format!("{s:?} is not a hexadecimal byte"),
        })
    };
    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                // #abc is shorthand for #aabbcc
                let v = component(&c.to_string())?;
                out[i] = v * 16 + v;
            }
            Ok(out)
        }
        6 => Ok([
            component(&digits[0..2])?,
            component(&digits[2..4])?,
            component(&digits[4..6])?,
        ]),
        len => Err(VizError::ColorFormat {
            input: hex.to_string(),
            reason: format!("expected 3 or 6 hex digits, got {len}"),
        }),
    }
}
