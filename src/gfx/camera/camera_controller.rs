//! Keyboard and mouse-drag camera control
//!
//! The controller accumulates winit events between frames and applies them to
//! the camera once per render-loop iteration. Keyboard keys translate eye and
//! target together by a fixed step; a held primary-button drag re-aims the
//! target by a fixed 1 degree step around an axis derived from the drag
//! direction. The drag picks the axis, never the speed.

use cgmath::{Rad, Vector2, Vector3};
use winit::{
    event::{DeviceEvent, ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::fly_camera::FlyCamera;
use super::vector_math::{cross, normalized, normalized_2d, rotate_around_axis};

/// Per-frame translation step in world units.
pub const MOVE_STEP: f32 = 0.1;

/// Fixed rotation applied per dragged frame, independent of drag magnitude.
pub const ROTATE_STEP: Rad<f32> = Rad(std::f32::consts::PI / 180.0);

/// Snapshot of the input relevant to one camera update.
///
/// Built once per render-loop iteration from the events accumulated since the
/// previous frame, consumed by [`CameraController::update_camera`] and then
/// discarded.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub forward: bool,
    pub back: bool,
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
    /// Cursor displacement since the previous frame.
    pub cursor_delta: Vector2<f32>,
    /// True while the primary mouse button is held.
    pub rotating: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            forward: false,
            back: false,
            right: false,
            left: false,
            up: false,
            down: false,
            cursor_delta: Vector2::new(0.0, 0.0),
            rotating: false,
        }
    }
}

pub struct CameraController {
    pub move_step: f32,
    pub rotate_step: Rad<f32>,
    forward: bool,
    back: bool,
    right: bool,
    left: bool,
    up: bool,
    down: bool,
    is_mouse_pressed: bool,
    pending_delta: Vector2<f32>,
}

impl CameraController {
    pub fn new(move_step: f32, rotate_step: Rad<f32>) -> Self {
        Self {
            move_step,
            rotate_step,
            forward: false,
            back: false,
            right: false,
            left: false,
            up: false,
            down: false,
            is_mouse_pressed: false,
            pending_delta: Vector2::new(0.0, 0.0),
        }
    }

    pub fn process_events(&mut self, event: &DeviceEvent) {
        match event {
            DeviceEvent::Button {
                button: 0, // Left Mouse Button
                state,
            } => {
                self.is_mouse_pressed = *state == ElementState::Pressed;
            }
            DeviceEvent::MouseMotion { delta } => {
                if self.is_mouse_pressed {
                    self.pending_delta += Vector2::new(delta.0 as f32, delta.1 as f32);
                }
            }
            _ => (),
        }
    }

    pub fn process_keyed_events(&mut self, event: &KeyEvent) {
        let pressed = event.state == ElementState::Pressed;
        match event.physical_key {
            PhysicalKey::Code(KeyCode::KeyW) => self.forward = pressed,
            PhysicalKey::Code(KeyCode::KeyS) => self.back = pressed,
            PhysicalKey::Code(KeyCode::KeyD) => self.right = pressed,
            PhysicalKey::Code(KeyCode::KeyA) => self.left = pressed,
            PhysicalKey::Code(KeyCode::Space) => self.up = pressed,
            PhysicalKey::Code(KeyCode::ControlLeft) => self.down = pressed,
            _ => (),
        }
    }

    /// Drains the input accumulated since the previous frame into a snapshot.
    pub fn take_frame_input(&mut self) -> FrameInput {
        let cursor_delta = std::mem::replace(&mut self.pending_delta, Vector2::new(0.0, 0.0));
        FrameInput {
            forward: self.forward,
            back: self.back,
            right: self.right,
            left: self.left,
            up: self.up,
            down: self.down,
            cursor_delta,
            rotating: self.is_mouse_pressed,
        }
    }

    /// Applies one frame of input: additive key translation, then drag rotation.
    pub fn update_camera(&self, camera: &mut FlyCamera, input: &FrameInput) {
        self.apply_translation(camera, input);
        self.apply_rotation(camera, input);
        camera.update_view_proj();
    }

    /// Moves eye and target together along the held directions.
    ///
    /// Each direction contributes `move_step` along its normalized axis;
    /// multiple held keys are independent and additive. A degenerate axis
    /// (zero-length view or strafe vector) contributes nothing.
    fn apply_translation(&self, camera: &mut FlyCamera, input: &FrameInput) {
        let view = camera.view_dir();
        let side = cross(view, camera.up);

        let mut step = Vector3::new(0.0, 0.0, 0.0);
        if let Some(dir) = normalized(view) {
            if input.forward {
                step += dir * self.move_step;
            }
            if input.back {
                step -= dir * self.move_step;
            }
        }
        if let Some(dir) = normalized(side) {
            if input.right {
                step += dir * self.move_step;
            }
            if input.left {
                step -= dir * self.move_step;
            }
        }
        if let Some(dir) = normalized(camera.up) {
            if input.up {
                step += dir * self.move_step;
            }
            if input.down {
                step -= dir * self.move_step;
            }
        }

        camera.eye += step;
        camera.target += step;
    }

    /// Re-aims the target around the eye while the primary button is dragged.
    ///
    /// The normalized drag direction selects a rotation axis: the strafe
    /// vector is swung about the negated view direction by
    /// `acos(dy)`, signed by the horizontal drag component, and the view
    /// direction then rotates about that axis by the fixed `rotate_step`.
    /// Both rotations use unit axes, so the view vector keeps its length and
    /// turns by exactly `rotate_step` per frame. Skipped entirely for a zero
    /// drag or a degenerate view or axis, so no NaN can reach the camera.
    fn apply_rotation(&self, camera: &mut FlyCamera, input: &FrameInput) {
        if !input.rotating {
            return;
        }
        let Some(drag) = normalized_2d(input.cursor_delta) else {
            return;
        };

        let view = camera.view_dir();
        let Some(view_dir) = normalized(view) else {
            return;
        };
        let side = cross(view, camera.up);

        let mut angle = drag.y.clamp(-1.0, 1.0).acos();
        if drag.x < 0.0 {
            angle = -angle;
        }

        // Zero when the view is parallel to up; skip the frame then.
        let Some(axis) = normalized(-rotate_around_axis(side, Rad(angle), -view_dir)) else {
            return;
        };
        camera.target = rotate_around_axis(view, self.rotate_step, axis) + camera.eye;
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(MOVE_STEP, ROTATE_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::vector_math::{angle_cos, length};
    use approx::assert_relative_eq;
    use cgmath::Vector3;

    fn test_camera() -> FlyCamera {
        FlyCamera::new(Vector3::new(4.0, 4.0, 4.0), Vector3::new(0.0, 0.0, 0.0), 1.0)
    }

    fn assert_finite(v: Vector3<f32>) {
        assert!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
    }

    #[test]
    fn idle_frame_leaves_camera_untouched() {
        let controller = CameraController::default();
        let mut camera = test_camera();
        let before = camera;

        controller.update_camera(&mut camera, &FrameInput::default());

        assert_eq!(camera.eye, before.eye);
        assert_eq!(camera.target, before.target);
        assert_eq!(camera.up, before.up);
        assert_eq!(camera.uniform, before.uniform);
    }

    #[test]
    fn forward_key_moves_eye_and_target_along_the_view_direction() {
        let controller = CameraController::default();
        let mut camera = test_camera();
        let view_before = camera.view_dir();

        let input = FrameInput {
            forward: true,
            ..FrameInput::default()
        };
        controller.update_camera(&mut camera, &input);

        let moved = camera.eye - Vector3::new(4.0, 4.0, 4.0);
        assert_relative_eq!(length(moved), MOVE_STEP, epsilon = 1e-6);
        // Both endpoints moved by the same vector, so the view is unchanged.
        assert_relative_eq!(length(camera.view_dir() - view_before), 0.0, epsilon = 1e-6);
        // And the step points from eye towards target.
        assert!(angle_cos(moved, view_before) > 0.999);
    }

    #[test]
    fn opposite_keys_cancel_out() {
        let controller = CameraController::default();
        let mut camera = test_camera();

        let input = FrameInput {
            forward: true,
            back: true,
            ..FrameInput::default()
        };
        controller.update_camera(&mut camera, &input);

        assert_eq!(camera.eye, Vector3::new(4.0, 4.0, 4.0));
        assert_eq!(camera.target, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn translations_from_multiple_keys_are_additive() {
        let controller = CameraController::default();
        let mut camera = test_camera();

        let input = FrameInput {
            forward: true,
            up: true,
            ..FrameInput::default()
        };
        controller.update_camera(&mut camera, &input);

        let forward_part = normalized(Vector3::new(-4.0, -4.0, -4.0)).unwrap() * MOVE_STEP;
        let up_part = Vector3::unit_y() * MOVE_STEP;
        let moved = camera.eye - Vector3::new(4.0, 4.0, 4.0);
        assert_relative_eq!(length(moved - (forward_part + up_part)), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_drag_applies_no_rotation() {
        let controller = CameraController::default();
        let mut camera = test_camera();
        let before = camera;

        let input = FrameInput {
            rotating: true,
            cursor_delta: Vector2::new(0.0, 0.0),
            ..FrameInput::default()
        };
        controller.update_camera(&mut camera, &input);

        assert_eq!(camera.eye, before.eye);
        assert_eq!(camera.target, before.target);
    }

    #[test]
    fn drag_without_button_applies_no_rotation() {
        let controller = CameraController::default();
        let mut camera = test_camera();
        let before = camera;

        let input = FrameInput {
            rotating: false,
            cursor_delta: Vector2::new(10.0, -3.0),
            ..FrameInput::default()
        };
        controller.update_camera(&mut camera, &input);

        assert_eq!(camera.target, before.target);
    }

    #[test]
    fn coincident_eye_and_target_skip_the_frame_without_nan() {
        let controller = CameraController::default();
        let mut camera = FlyCamera::new(
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.0, 1.0, 1.0),
            1.0,
        );

        let input = FrameInput {
            forward: true,
            rotating: true,
            cursor_delta: Vector2::new(5.0, 5.0),
            ..FrameInput::default()
        };
        controller.update_camera(&mut camera, &input);

        // Translation along the degenerate view axis is skipped, rotation too.
        assert_eq!(camera.target, Vector3::new(1.0, 1.0, 1.0));
        assert_finite(camera.eye);
        assert_finite(camera.target);
    }

    #[test]
    fn drag_rotation_keeps_the_eye_fixed_and_reaims_the_target() {
        let controller = CameraController::default();
        let mut camera = test_camera();
        let target_before = camera.target;

        let input = FrameInput {
            rotating: true,
            cursor_delta: Vector2::new(12.0, 4.0),
            ..FrameInput::default()
        };
        controller.update_camera(&mut camera, &input);

        assert_eq!(camera.eye, Vector3::new(4.0, 4.0, 4.0));
        assert!(camera.target != target_before);
        assert_finite(camera.target);
    }

    #[test]
    fn drag_rotation_turns_the_view_by_exactly_one_step_without_stretching_it() {
        let controller = CameraController::default();
        let mut camera = test_camera();
        let view_before = camera.view_dir();

        let input = FrameInput {
            rotating: true,
            cursor_delta: Vector2::new(12.0, 4.0),
            ..FrameInput::default()
        };
        controller.update_camera(&mut camera, &input);

        let view_after = camera.view_dir();
        // A pure rotation: the view keeps its length and turns by the fixed step.
        assert_relative_eq!(length(view_after), length(view_before), epsilon = 1e-4);
        let turned = angle_cos(view_before, view_after).clamp(-1.0, 1.0).acos();
        assert_relative_eq!(turned, ROTATE_STEP.0, epsilon = 1e-4);
    }

    #[test]
    fn drag_with_the_view_parallel_to_up_skips_the_frame() {
        let controller = CameraController::default();
        let mut camera = FlyCamera::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 5.0, 0.0),
            1.0,
        );
        let target_before = camera.target;

        let input = FrameInput {
            rotating: true,
            cursor_delta: Vector2::new(7.0, -2.0),
            ..FrameInput::default()
        };
        controller.update_camera(&mut camera, &input);

        // No strafe axis exists, so the rotation axis degenerates to zero.
        assert_eq!(camera.target, target_before);
        assert_finite(camera.target);
    }

    #[test]
    fn take_frame_input_drains_the_pending_cursor_delta() {
        let mut controller = CameraController::default();
        controller.process_events(&DeviceEvent::Button {
            button: 0,
            state: ElementState::Pressed,
        });
        controller.process_events(&DeviceEvent::MouseMotion { delta: (3.0, 4.0) });
        controller.process_events(&DeviceEvent::MouseMotion { delta: (1.0, -1.0) });

        let first = controller.take_frame_input();
        assert!(first.rotating);
        assert_eq!(first.cursor_delta, Vector2::new(4.0, 3.0));

        let second = controller.take_frame_input();
        assert_eq!(second.cursor_delta, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn mouse_motion_is_ignored_while_the_button_is_up() {
        let mut controller = CameraController::default();
        controller.process_events(&DeviceEvent::MouseMotion { delta: (9.0, 9.0) });
        assert_eq!(controller.take_frame_input().cursor_delta, Vector2::new(0.0, 0.0));
    }
}
