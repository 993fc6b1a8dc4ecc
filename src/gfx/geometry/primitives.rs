//! # Primitive Shape Generation

use super::GeometryData;

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes.
/// Each face has proper normals pointing outward.
pub fn generate_cube() -> GeometryData {
    #[rustfmt::skip]
    let positions = vec![
        // Front face
        [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5],
        // Back face
        [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5, -0.5, -0.5],
        // Left face
        [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5],
        // Right face
        [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5],
        // Top face
        [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5],
        // Bottom face
        [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5],
    ];

    #[rustfmt::skip]
    let normals = vec![
        // Front face (positive Z)
        [0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0],
        // Back face (negative Z)
        [0.0, 0.0, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0, -1.0],
        // Left face (negative X)
        [-1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [-1.0, 0.0, 0.0],
        // Right face (positive X)
        [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0],
        // Top face (positive Y)
        [0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0],
        // Bottom face (negative Y)
        [0.0, -1.0, 0.0], [0.0, -1.0, 0.0], [0.0, -1.0, 0.0], [0.0, -1.0, 0.0],
    ];

    // Indices for each face (2 triangles per face, counter-clockwise)
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,    2, 3, 0,       // front
        4, 5, 6,    6, 7, 4,       // back
        8, 9, 10,   10, 11, 8,     // left
        12, 13, 14, 14, 15, 12,    // right
        16, 17, 18, 18, 19, 16,    // top
        20, 21, 22, 22, 23, 20,    // bottom
    ];

    GeometryData {
        vertices: positions,
        normals,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn test_cube_is_unit_sized() {
        let cube = generate_cube();
        for position in &cube.vertices {
            for coordinate in position {
                assert_eq!(coordinate.abs(), 0.5);
            }
        }
    }

    #[test]
    fn test_cube_normals_are_axis_aligned_units() {
        let cube = generate_cube();
        assert_eq!(cube.normals.len(), cube.vertices.len());
        for normal in &cube.normals {
            let len_sq: f32 = normal.iter().map(|c| c * c).sum();
            assert_eq!(len_sq, 1.0);
        }
    }

    #[test]
    fn test_scene_format_keeps_every_vertex() {
        let cube = generate_cube();
        let (vertices, indices) = cube.to_scene_format();
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        assert_eq!(vertices[0].position, [-0.5, -0.5, 0.5]);
        assert_eq!(vertices[0].normal, [0.0, 0.0, 1.0]);
    }
}
