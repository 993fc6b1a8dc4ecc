//! # Graphics Module
//!
//! All graphics-related functionality for the block viewer:
//!
//! - **Camera System** ([`camera`]) - Free-look camera with keyboard
//!   translation and mouse-drag rotation
//! - **Geometry** ([`geometry`]) - Procedural unit-cube generation
//! - **Rendering** ([`rendering`]) - wgpu pipeline and frame submission
//! - **Scene** ([`scene`]) - Block loading and per-instance GPU state
//! - **Resources** ([`resources`]) - Depth buffer and global uniforms

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::fly_camera::FlyCamera;
pub use rendering::render_engine::RenderEngine;
pub use scene::Scene;
