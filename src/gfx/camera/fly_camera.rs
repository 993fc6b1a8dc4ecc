use cgmath::{perspective, EuclideanSpace, Matrix4, Point3, Rad, Vector3};

use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Free-look camera defined by an eye position, a look-at target and a fixed
/// world-up vector.
///
/// `up` stays constant for the whole session; `eye` and `target` move together
/// under keyboard translation, and rotation re-aims `target` around `eye`, so
/// the view direction `target - eye` always reflects the accumulated input.
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for FlyCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl FlyCamera {
    pub fn new(eye: Vector3<f32>, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            eye,
            target,
            up: Vector3::unit_y(),
            aspect,
            fovy: Rad(std::f32::consts::FRAC_PI_4),
            znear: 0.1,
            zfar: 100.0,
            uniform: CameraUniform::default(),
        };
        camera.update_view_proj();
        camera
    }

    /// Vector from the eye to the look-at target.
    pub fn view_dir(&self) -> Vector3<f32> {
        self.target - self.eye
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
        self.update_view_proj();
    }

    /// Recomputes the cached GPU uniform from the current eye/target/up.
    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}
