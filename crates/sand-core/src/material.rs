//! Material kinds, brushes, and the per-session material factory.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;

use crate::color::Color;
use crate::error::{SandError, SandResult};
use crate::gradient::{DitherPhase, Gradient};

/// Dark purple through red to orange.
pub const AUTUMNAL: [Color; 4] = [
    Color::rgb(86, 24, 70),
    Color::rgb(148, 11, 63),
    Color::rgb(199, 0, 57),
    Color::rgb(255, 99, 56),
];

/// Soft pinks fading to cream.
pub const PEACHY: [Color; 3] = [
    Color::rgb(255, 139, 168),
    Color::rgb(253, 174, 174),
    Color::rgb(246, 226, 179),
];

/// Chocolate, caramel, strawberry, vanilla.
pub const ICE_CREAM: [Color; 5] = [
    Color::rgb(0x14, 0x14, 0x14),
    Color::rgb(0x68, 0x37, 0x2D),
    Color::rgb(0xD1, 0x77, 0x59),
    Color::rgb(0xFF, 0xB8, 0xBA),
    Color::rgb(0xF7, 0xE8, 0xD7),
];

/// How a material moves each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Falls straight down, else slides diagonally.
    Granular,
    /// Falls like granular material and spreads sideways on flat ground.
    Fluid,
    /// Never moves.
    Static,
}

impl Behavior {
    /// Single-character glyph for text renders.
    pub fn glyph(self) -> char {
        match self {
            Self::Granular => 's',
            Self::Fluid => '~',
            Self::Static => '#',
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Granular => "granular",
            Self::Fluid => "fluid",
            Self::Static => "static",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A placeable material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaterialKind {
    /// Red-orange sand.
    Sand,
    /// Pink sand.
    Peachy,
    /// Brown-to-cream sand.
    IceCream,
    /// Blue fluid.
    Water,
    /// Static wall.
    Block,
}

impl MaterialKind {
    /// Every material, in menu order.
    pub const ALL: [MaterialKind; 5] = [
        MaterialKind::Sand,
        MaterialKind::Peachy,
        MaterialKind::IceCream,
        MaterialKind::Water,
        MaterialKind::Block,
    ];

    /// Movement rule for this material.
    pub fn behavior(self) -> Behavior {
        match self {
            Self::Sand | Self::Peachy | Self::IceCream => Behavior::Granular,
            Self::Water => Behavior::Fluid,
            Self::Block => Behavior::Static,
        }
    }

    /// Palette dithered per cell, for granular materials.
    pub fn palette(self) -> Option<&'static [Color]> {
        match self {
            Self::Sand => Some(&AUTUMNAL),
            Self::Peachy => Some(&PEACHY),
            Self::IceCream => Some(&ICE_CREAM),
            Self::Water | Self::Block => None,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sand => "Sand",
            Self::Peachy => "Peachy",
            Self::IceCream => "IceCream",
            Self::Water => "Water",
            Self::Block => "Block",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaterialKind {
    type Err = SandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == wanted)
            .ok_or_else(|| SandError::UnknownMaterial(s.to_string()))
    }
}

/// The material carried by a placed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    /// What the cell is made of.
    pub kind: MaterialKind,
    /// Color fixed when the cell was created.
    pub color: Color,
}

impl Material {
    /// Color to draw this material with.
    ///
    /// Blocks follow the theme; everything else keeps its creation color.
    pub fn display_color(&self, dark_mode: bool) -> Color {
        match self.kind {
            MaterialKind::Block if dark_mode => Color::WHITE_SMOKE,
            MaterialKind::Block => Color::BLACK,
            _ => self.color,
        }
    }
}

/// A host tool: place a material or erase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brush {
    /// Create cells of this material.
    Material(MaterialKind),
    /// Destroy cells.
    Erase,
}

impl Brush {
    /// Every brush, in menu order.
    pub const ALL: [Brush; 6] = [
        Brush::Material(MaterialKind::Sand),
        Brush::Material(MaterialKind::Peachy),
        Brush::Material(MaterialKind::IceCream),
        Brush::Material(MaterialKind::Water),
        Brush::Material(MaterialKind::Block),
        Brush::Erase,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Material(kind) => kind.name(),
            Self::Erase => "Erase",
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::Material(MaterialKind::Sand)
    }
}

impl fmt::Display for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Brush {
    type Err = SandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("erase") {
            return Ok(Self::Erase);
        }
        s.parse().map(Self::Material)
    }
}

/// Builds materials for one session.
///
/// Owns the interpolated gradients and the dither phase shared by every
/// granular material, so separate sessions never affect each other's colors.
#[derive(Debug, Clone)]
pub struct MaterialFactory {
    sand: Gradient,
    peachy: Gradient,
    ice_cream: Gradient,
    phase: DitherPhase,
}

impl MaterialFactory {
    /// Interpolate each granular palette to `stops` stops.
    pub fn new(stops: usize, dither_step: f64) -> SandResult<Self> {
        Ok(Self {
            sand: Gradient::interpolate(&AUTUMNAL, stops)?,
            peachy: Gradient::interpolate(&PEACHY, stops)?,
            ice_cream: Gradient::interpolate(&ICE_CREAM, stops)?,
            phase: DitherPhase::new(dither_step),
        })
    }

    /// Gradient used for a granular material.
    pub fn gradient(&self, kind: MaterialKind) -> Option<&Gradient> {
        match kind {
            MaterialKind::Sand => Some(&self.sand),
            MaterialKind::Peachy => Some(&self.peachy),
            MaterialKind::IceCream => Some(&self.ice_cream),
            MaterialKind::Water | MaterialKind::Block => None,
        }
    }

    /// Current granular dither phase.
    pub fn phase(&self) -> &DitherPhase {
        &self.phase
    }

    /// Build a material, sampling a color for granular kinds.
    ///
    /// Granular builds advance the shared dither phase.
    pub fn build(&mut self, kind: MaterialKind, rng: &mut StdRng) -> Material {
        let color = match kind.behavior() {
            Behavior::Granular => {
                let x = self.phase.next_phase();
                self.gradient(kind)
                    .map_or(Color::BLACK, |gradient| gradient.random_dither(x, rng))
            }
            Behavior::Fluid | Behavior::Static => fixed_color(kind),
        };
        Material { kind, color }
    }

    /// Every color `kind` can be built with: gradient stops for granular
    /// kinds, the single fixed color otherwise.
    pub fn swatches(&self, kind: MaterialKind) -> Vec<Color> {
        self.gradient(kind)
            .map_or_else(|| vec![fixed_color(kind)], |g| g.stops().to_vec())
    }
}

fn fixed_color(kind: MaterialKind) -> Color {
    match kind {
        MaterialKind::Water => Color::DEEP_SKY_BLUE,
        _ => Color::BLACK,
    }
}
