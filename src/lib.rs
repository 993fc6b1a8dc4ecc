// src/lib.rs
//! blockview
//!
//! An interactive 3D viewer for `.XYZ` block coordinate files, built on wgpu
//! and winit. Each coordinate triple in the input file becomes a unit cube;
//! a free-look camera moves with WASD/Space/LCtrl and rotates under
//! mouse drag.

pub mod app;
pub mod error;
pub mod gfx;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::ViewerApp;
pub use error::ViewerError;
