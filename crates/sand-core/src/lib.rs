//! Falling-sand cellular automaton.
//!
//! A [`Grid`] holds cells of [`Material`]s; each frame the [`Simulation`]
//! walks the live cells in creation order and lets each one try a single
//! move according to its [`Behavior`]. Rendering and input live in the
//! front-end crates; this crate only exposes colors and coordinates.

/// Cell handles and per-cell state.
pub mod cell;
/// sRGB colors and gamma-aware blending.
pub mod color;
/// Session configuration.
pub mod config;
/// Error types for the simulation crate.
pub mod error;
/// Palette gradients and dithering.
pub mod gradient;
/// The occupancy grid.
pub mod grid;
/// Material kinds, brushes and the factory that colors new cells.
pub mod material;
/// Movement rules for each behavior.
pub mod rules;
/// Preset layouts and emitters.
pub mod scene;
/// Top-level simulation session.
pub mod simulation;
/// Pointer stroke interpolation and pen shapes.
pub mod stroke;

/// Re-exports of [`cell::Cell`] and [`cell::CellId`].
pub use cell::{Cell, CellId};
/// Re-export of [`color::Color`].
pub use color::Color;
/// Re-export of [`config::SandConfig`].
pub use config::SandConfig;
/// Re-exports of [`error::SandError`] and [`error::SandResult`].
pub use error::{SandError, SandResult};
/// Re-exports of [`gradient::Gradient`] and [`gradient::DitherPhase`].
pub use gradient::{DitherPhase, Gradient};
/// Re-export of [`grid::Grid`].
pub use grid::Grid;
/// Re-exports of the material types.
pub use material::{Behavior, Brush, Material, MaterialFactory, MaterialKind};
/// Re-exports of [`scene::Scene`] and [`scene::Emitter`].
pub use scene::{Emitter, Scene};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-exports of [`stroke::Stroke`] and [`stroke::pen`].
pub use stroke::{Stroke, pen};
