use glam::Vec3;

use crate::types::{MeshVertex, PointVertex};

/// Flat, subdivided rectangular grid centered on the origin in the XY
/// plane, one vertex per segment corner. Rendered as a point cloud by the
/// morph scene.
pub fn point_grid(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Vec<PointVertex> {
    let cols = segments_x + 1;
    let rows = segments_y + 1;
    let mut vertices = Vec::with_capacity((cols * rows) as usize);

    for row in 0..rows {
        let v = row as f32 / segments_y as f32;
        let y = (v - 0.5) * height;
        for col in 0..cols {
            let u = col as f32 / segments_x as f32;
            let x = (u - 0.5) * width;
            vertices.push(PointVertex {
                position: [x, y, 0.0],
                uv: [u, v],
            });
        }
    }

    vertices
}

/// Regular icosahedron with flat-shaded faces (vertices duplicated per
/// face so each triangle carries its own normal), scaled to `radius`.
pub fn icosahedron(radius: f32) -> (Vec<MeshVertex>, Vec<u32>) {
    // Golden-ratio construction: three orthogonal golden rectangles.
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];

    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 3],
    ];

    let mut vertices = Vec::with_capacity(FACES.len() * 3);
    let mut indices = Vec::with_capacity(FACES.len() * 3);

    for face in FACES {
        let a = corners[face[0]].normalize() * radius;
        let b = corners[face[1]].normalize() * radius;
        let c = corners[face[2]].normalize() * radius;
        let normal = (b - a).cross(c - a).normalize();

        for position in [a, b, c] {
            indices.push(vertices.len() as u32);
            vertices.push(MeshVertex {
                position: position.to_array(),
                normal: normal.to_array(),
            });
        }
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_one_vertex_per_segment_corner() {
        let grid = point_grid(600.0, 350.0, 600, 350);
        assert_eq!(grid.len(), 601 * 351);
    }

    #[test]
    fn grid_is_centered_with_corner_uvs() {
        let grid = point_grid(10.0, 4.0, 2, 2);
        assert_eq!(grid.len(), 9);

        let first = grid[0];
        assert_eq!(first.position, [-5.0, -2.0, 0.0]);
        assert_eq!(first.uv, [0.0, 0.0]);

        let last = grid[8];
        assert_eq!(last.position, [5.0, 2.0, 0.0]);
        assert_eq!(last.uv, [1.0, 1.0]);

        let center = grid[4];
        assert_eq!(center.position, [0.0, 0.0, 0.0]);
        assert_eq!(center.uv, [0.5, 0.5]);
    }

    #[test]
    fn grid_lies_in_the_xy_plane() {
        for vertex in point_grid(600.0, 350.0, 16, 16) {
            assert_eq!(vertex.position[2], 0.0);
        }
    }

    #[test]
    fn icosahedron_has_twenty_flat_faces() {
        let (vertices, indices) = icosahedron(3.0);
        assert_eq!(vertices.len(), 60);
        assert_eq!(indices.len(), 60);
    }

    #[test]
    fn icosahedron_vertices_sit_on_the_sphere() {
        let (vertices, _) = icosahedron(3.0);
        for vertex in &vertices {
            let p = Vec3::from_array(vertex.position);
            assert!((p.length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn icosahedron_normals_point_outward() {
        let (vertices, indices) = icosahedron(1.0);
        for triangle in indices.chunks(3) {
            let a = Vec3::from_array(vertices[triangle[0] as usize].position);
            let b = Vec3::from_array(vertices[triangle[1] as usize].position);
            let c = Vec3::from_array(vertices[triangle[2] as usize].position);
            let centroid = (a + b + c) / 3.0;
            let normal = Vec3::from_array(vertices[triangle[0] as usize].normal);
            assert!(normal.dot(centroid) > 0.0, "inward-facing face");
            assert!((normal.length() - 1.0).abs() < 1e-4);
        }
    }
}
