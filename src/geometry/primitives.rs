//! # Primitive Shape Generation
//!
//! This module contains functions to generate common polygonal primitives
//! for authoring documents without external model files. Shapes share
//! vertices between faces and carry per-corner UV coordinates; quads and
//! ngons are left intact so the export path's triangulation does the
//! splitting.

use crate::document::mesh::{MeshData, Polygon};
use std::f32::consts::PI;

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes: 8 shared
/// vertices and 6 quad faces, each with UV coordinates from 0 to 1.
pub fn generate_cube() -> MeshData {
    let mut data = MeshData::new();

    data.positions = vec![
        // Bottom ring (z = -0.5)
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        // Top ring (z = 0.5)
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ];

    let face_uv = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    // One quad per face, counter-clockwise seen from outside
    let faces = [
        [0, 3, 2, 1], // bottom (negative Z)
        [4, 5, 6, 7], // top (positive Z)
        [0, 1, 5, 4], // front (negative Y)
        [1, 2, 6, 5], // right (positive X)
        [2, 3, 7, 6], // back (positive Y)
        [3, 0, 4, 7], // left (negative X)
    ];

    for face in faces {
        data.polygons
            .push(Polygon::new(face.to_vec()).with_uv(face_uv.clone()));
    }

    data
}

/// Generate a plane in the XY plane (horizontal in Z-up coordinate system)
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `height` - Height of the plane (Y direction)
/// * `width_segments` - Number of subdivisions along width
/// * `height_segments` - Number of subdivisions along height
///
/// Returns a plane of quads centered at the origin, facing positive Z.
pub fn generate_plane(
    width: f32,
    height: f32,
    width_segments: u32,
    height_segments: u32,
) -> MeshData {
    let mut data = MeshData::new();

    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);

    // Generate vertices
    for y in 0..=h_segs {
        let v = y as f32 / h_segs as f32;
        let pos_y = (v - 0.5) * height;

        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;
            let pos_x = (u - 0.5) * width;

            data.positions.push([pos_x, pos_y, 0.0]);
        }
    }

    // One quad per grid cell (counter-clockwise seen from above)
    for y in 0..h_segs {
        for x in 0..w_segs {
            let i = y * (w_segs + 1) + x;
            let next_row = i + w_segs + 1;

            let uv = |idx: u32| {
                let col = idx % (w_segs + 1);
                let row = idx / (w_segs + 1);
                [
                    col as f32 / w_segs as f32,
                    row as f32 / h_segs as f32,
                ]
            };

            let corners = [i, i + 1, next_row + 1, next_row];
            data.polygons.push(
                Polygon::new(corners.to_vec()).with_uv(corners.iter().map(|&c| uv(c)).collect()),
            );
        }
    }

    data
}

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
///
/// Returns a sphere of radius 1.0 centered at the origin, with triangle
/// fans at the poles and quad bands between them.
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> MeshData {
    let mut data = MeshData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    // North pole, then interior rings (seam column duplicated for clean
    // UVs), then south pole
    data.positions.push([0.0, 0.0, 1.0]);

    for lat in 1..lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI
            data.positions
                .push([sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta]);
        }
    }

    data.positions.push([0.0, 0.0, -1.0]);

    let north = 0u32;
    let south = (data.positions.len() - 1) as u32;
    let ring = |lat: u32, long: u32| 1 + (lat - 1) * (long_segs + 1) + long;
    let u_at = |long: u32| long as f32 / long_segs as f32;
    let v_at = |lat: u32| 1.0 - lat as f32 / lat_segs as f32;

    // Top cap: triangle fan around the north pole
    for long in 0..long_segs {
        let uv = vec![
            [(u_at(long) + u_at(long + 1)) * 0.5, 1.0],
            [u_at(long), v_at(1)],
            [u_at(long + 1), v_at(1)],
        ];
        data.polygons
            .push(Polygon::new(vec![north, ring(1, long), ring(1, long + 1)]).with_uv(uv));
    }

    // Quad bands between interior rings
    for lat in 1..lat_segs - 1 {
        for long in 0..long_segs {
            let corners = vec![
                ring(lat, long),
                ring(lat + 1, long),
                ring(lat + 1, long + 1),
                ring(lat, long + 1),
            ];
            let uv = vec![
                [u_at(long), v_at(lat)],
                [u_at(long), v_at(lat + 1)],
                [u_at(long + 1), v_at(lat + 1)],
                [u_at(long + 1), v_at(lat)],
            ];
            data.polygons.push(Polygon::new(corners).with_uv(uv));
        }
    }

    // Bottom cap: triangle fan around the south pole
    for long in 0..long_segs {
        let uv = vec![
            [(u_at(long) + u_at(long + 1)) * 0.5, 0.0],
            [u_at(long + 1), v_at(lat_segs - 1)],
            [u_at(long), v_at(lat_segs - 1)],
        ];
        data.polygons.push(
            Polygon::new(vec![
                south,
                ring(lat_segs - 1, long + 1),
                ring(lat_segs - 1, long),
            ])
            .with_uv(uv),
        );
    }

    data
}
