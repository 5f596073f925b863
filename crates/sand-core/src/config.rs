use serde::{Deserialize, Serialize};

use crate::error::{SandError, SandResult};

/// Configuration for a simulation session.
///
/// Grid dimensions are fixed once the session is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandConfig {
    /// RNG seed for deterministic movement and dithering.
    pub seed: u64,
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Screen pixels per cell, used by hosts to size the grid.
    pub pixel_size: u32,
    /// Amount the granular dither phase moves per created cell.
    pub dither_step: f64,
    /// Number of stops each granular palette is interpolated to.
    pub gradient_stops: usize,
    /// Render static blocks in the light color.
    pub dark_mode: bool,
}

impl Default for SandConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: 160,
            height: 90,
            pixel_size: 4,
            dither_step: 0.001,
            gradient_stops: 10,
            dark_mode: false,
        }
    }
}

impl SandConfig {
    /// Derive grid dimensions from a viewport measured in screen pixels.
    pub fn for_viewport(viewport_w: u32, viewport_h: u32, pixel_size: u32) -> Self {
        let pixel_size = pixel_size.max(1);
        Self {
            width: viewport_w / pixel_size,
            height: viewport_h / pixel_size,
            pixel_size,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SandResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SandError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a usable session.
    pub fn validate(&self) -> SandResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SandError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.pixel_size == 0 {
            return Err(SandError::Config("pixel_size must be at least 1".into()));
        }
        if self.gradient_stops < 2 {
            return Err(SandError::Config(
                "gradient_stops must be at least 2".into(),
            ));
        }
        let step_in_range = self.dither_step > 0.0 && self.dither_step < 1.0;
        if !step_in_range {
            return Err(SandError::Config(format!(
                "dither_step must be in (0, 1), got {}",
                self.dither_step
            )));
        }
        Ok(())
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the grid dimensions in cells.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the granular dither step.
    pub fn with_dither_step(mut self, step: f64) -> Self {
        self.dither_step = step;
        self
    }

    /// Set the number of gradient stops per granular palette.
    pub fn with_gradient_stops(mut self, stops: usize) -> Self {
        self.gradient_stops = stops;
        self
    }

    /// Enable or disable dark mode.
    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = dark;
        self
    }
}
