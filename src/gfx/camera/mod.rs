pub mod camera_controller;
pub mod camera_utils;
pub mod fly_camera;
pub mod vector_math;

// Re-export main types
pub use camera_controller::{CameraController, FrameInput};
pub use camera_utils::{CameraManager, CameraUniform};
pub use fly_camera::FlyCamera;
