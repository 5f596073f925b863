//! Interactive window for the falling-sand simulation.
//!
//! Paint materials with the pointer, pick brushes from a right-click menu,
//! and watch them settle. All simulation state lives in `sand-core`; this
//! crate maps pointer input to grid cells and draws one rectangle per cell.

pub mod app;
pub mod input;
pub mod menu;
pub mod theme;
pub mod widget;
