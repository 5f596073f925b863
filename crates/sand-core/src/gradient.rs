//! Multi-stop color gradients, dithering, and the oscillating dither phase.

use rand::Rng;
use rand::rngs::StdRng;

use crate::color::{Color, blend};
use crate::error::{SandError, SandResult};

/// An ordered list of color stops spread evenly over `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Color>,
}

impl Gradient {
    /// Create a gradient from at least one stop.
    pub fn new(stops: Vec<Color>) -> SandResult<Self> {
        if stops.is_empty() {
            return Err(SandError::Config("a gradient needs at least one stop".into()));
        }
        Ok(Self { stops })
    }

    /// Resample `palette` into `len` evenly spaced, smoothly blended stops.
    pub fn interpolate(palette: &[Color], len: usize) -> SandResult<Self> {
        let source = Self::new(palette.to_vec())?;
        if len < 2 {
            return Self::new(vec![source.smooth(0.0)]);
        }
        let last = (len - 1) as f64;
        Self::new((0..len).map(|i| source.smooth(i as f64 / last)).collect())
    }

    /// The stops of this gradient.
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`: a gradient holds at least one stop.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Continuous color at `x`, clamped to `[0, 1]`.
    pub fn smooth(&self, x: f64) -> Color {
        let point = x.clamp(0.0, 1.0) * (self.stops.len() - 1) as f64;
        let i = point.floor() as usize;
        match (self.stops.get(i), self.stops.get(i + 1)) {
            (Some(&a), Some(&b)) => blend(a, b, point - i as f64),
            (Some(&a), None) => a,
            _ => self.stops[self.stops.len() - 1],
        }
    }

    /// Locate `x` between two adjacent stops.
    ///
    /// Returns the fraction of the way from the lower stop to the upper one,
    /// followed by the lower and upper stops.
    pub fn dither(&self, x: f64) -> (f64, Color, Color) {
        if self.stops.len() < 2 {
            let only = self.stops[0];
            return (0.0, only, only);
        }
        let point = x.clamp(0.0, 1.0);
        let section = 1.0 / (self.stops.len() - 1) as f64;
        let last_section = self.stops.len() - 2;
        let i = (0..=last_section)
            .find(|&i| point >= section * i as f64 && point <= section * (i + 1) as f64)
            .unwrap_or(last_section);
        let mix = (point - section * i as f64) / section;
        (mix, self.stops[i], self.stops[i + 1])
    }

    /// Pick one of the two stops around `x`, the upper one with
    /// probability equal to the interpolation fraction.
    pub fn random_dither(&self, x: f64, rng: &mut StdRng) -> Color {
        let (mix, lower, upper) = self.dither(x);
        if rng.random::<f64>() < mix {
            upper
        } else {
            lower
        }
    }
}

/// A scalar that walks back and forth across `[0, 1]`.
///
/// Each sample returns the current phase and then advances it; the step
/// reverses whenever the phase leaves the open interval.
#[derive(Debug, Clone, PartialEq)]
pub struct DitherPhase {
    phase: f64,
    step: f64,
}

impl DitherPhase {
    /// Start at phase 0 moving upward by `step`.
    pub fn new(step: f64) -> Self {
        Self { phase: 0.0, step }
    }

    /// Current phase.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Current signed step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Return the current phase, then advance it.
    pub fn next_phase(&mut self) -> f64 {
        let current = self.phase;
        self.phase += self.step;
        if self.phase >= 1.0 || self.phase <= 0.0 {
            self.step = -self.step;
        }
        current
    }
}
