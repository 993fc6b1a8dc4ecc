//! Vector math helpers for the free-look camera
//!
//! Small pure functions over `cgmath` vectors. All of them are total over
//! finite inputs; the only caller obligation is to never normalize a
//! zero-length vector, which the `normalized*` helpers encode by returning
//! `None` instead.

use cgmath::{Matrix4, Rad, Vector2, Vector3};

/// Vectors shorter than this are treated as zero and never normalized.
pub const MIN_VECTOR_LENGTH: f32 = 1e-6;

/// 3D cross product.
pub fn cross(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// 3D dot product.
pub fn dot(a: Vector3<f32>, b: Vector3<f32>) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Euclidean length; yields 0 for the zero vector.
pub fn length(v: Vector3<f32>) -> f32 {
    dot(v, v).sqrt()
}

/// Cosine of the angle between two nonzero vectors.
///
/// Returns the cosine, not the angle: callers wanting radians apply `acos`
/// themselves.
pub fn angle_cos(a: Vector3<f32>, b: Vector3<f32>) -> f32 {
    dot(a, b) / (length(a) * length(b))
}

/// Rotates `v` by `angle` about `axis` with a standard axis-angle rotation.
///
/// The axis is used as given: an unnormalized axis skews the rotation, so
/// callers should pass a unit axis when they want a pure rotation.
pub fn rotate_around_axis(v: Vector3<f32>, angle: Rad<f32>, axis: Vector3<f32>) -> Vector3<f32> {
    (Matrix4::from_axis_angle(axis, angle) * v.extend(0.0)).truncate()
}

/// Unit vector in the direction of `v`, or `None` when `v` is degenerate.
pub fn normalized(v: Vector3<f32>) -> Option<Vector3<f32>> {
    let len = length(v);
    (len > MIN_VECTOR_LENGTH).then(|| v / len)
}

/// 2D counterpart of [`normalized`], used for the cursor drag vector.
pub fn normalized_2d(v: Vector2<f32>) -> Option<Vector2<f32>> {
    let len = (v.x * v.x + v.y * v.y).sqrt();
    (len > MIN_VECTOR_LENGTH).then(|| v / len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec_close(a: Vector3<f32>, b: Vector3<f32>, epsilon: f32) {
        assert_relative_eq!(a.x, b.x, epsilon = epsilon);
        assert_relative_eq!(a.y, b.y, epsilon = epsilon);
        assert_relative_eq!(a.z, b.z, epsilon = epsilon);
    }

    #[test]
    fn dot_is_symmetric() {
        let a = Vector3::new(1.5, -2.0, 0.25);
        let b = Vector3::new(-4.0, 3.0, 7.5);
        assert_eq!(dot(a, b), dot(b, a));
    }

    #[test]
    fn cross_is_antisymmetric() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-0.5, 4.0, 2.0);
        assert_vec_close(cross(a, b), -cross(b, a), 0.0);
    }

    #[test]
    fn cross_of_parallel_vectors_is_zero() {
        let a = Vector3::new(3.0, -1.0, 2.0);
        assert_eq!(length(cross(a, a)), 0.0);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3::unit_x();
        let y = Vector3::unit_y();
        assert_vec_close(cross(x, y), Vector3::unit_z(), 0.0);
    }

    #[test]
    fn angle_cos_of_a_vector_with_itself_is_one() {
        let a = Vector3::new(0.3, -8.0, 1.0);
        assert_relative_eq!(angle_cos(a, a), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn angle_cos_of_perpendicular_vectors_is_zero() {
        assert_relative_eq!(
            angle_cos(Vector3::unit_x(), Vector3::unit_y() * 4.0),
            0.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn zero_angle_rotation_is_identity() {
        let v = Vector3::new(2.0, -1.0, 0.5);
        let rotated = rotate_around_axis(v, Rad(0.0), Vector3::unit_y());
        assert_vec_close(rotated, v, 1e-6);
    }

    #[test]
    fn quarter_turn_around_y_maps_x_to_negative_z() {
        let rotated = rotate_around_axis(
            Vector3::unit_x(),
            Rad(std::f32::consts::FRAC_PI_2),
            Vector3::unit_y(),
        );
        assert_vec_close(rotated, -Vector3::unit_z(), 1e-6);
    }

    #[test]
    fn repeated_small_rotations_compose_into_one_large_rotation() {
        let axis = Vector3::new(0.0, 0.0, 1.0);
        let step = Rad(0.1);
        let k = 17;

        let mut stepped = Vector3::new(1.0, 2.0, -3.0);
        for _ in 0..k {
            stepped = rotate_around_axis(stepped, step, axis);
        }
        let direct = rotate_around_axis(Vector3::new(1.0, 2.0, -3.0), Rad(0.1 * k as f32), axis);

        assert_vec_close(stepped, direct, 1e-4);
    }

    #[test]
    fn rotation_preserves_length_for_unit_axis() {
        let v = Vector3::new(1.0, -4.0, 2.5);
        let rotated = rotate_around_axis(v, Rad(1.2), Vector3::unit_y());
        assert_relative_eq!(length(rotated), length(v), epsilon = 1e-5);
    }

    #[test]
    fn normalized_rejects_the_zero_vector() {
        assert!(normalized(Vector3::new(0.0, 0.0, 0.0)).is_none());
        assert!(normalized_2d(Vector2::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn normalized_yields_unit_length() {
        let n = normalized(Vector3::new(3.0, 4.0, 0.0)).unwrap();
        assert_relative_eq!(length(n), 1.0, epsilon = 1e-6);
    }
}
