//! Vectors and polylines
//!
//! Points are `glam::DVec3` with `z` left at zero for 2D artwork. All
//! operations are pure and return new values.

use crate::math::{deg_to_rad, lerp};
use glam::DVec3;

/// A point or offset in artwork space
pub type Vector = DVec3;

/// An ordered, open polyline. Draw order follows point order.
pub type Path = Vec<Vector>;

/// Create a vector; pass `0.0` for `z` in 2D
pub fn vector(x: f64, y: f64, z: f64) -> Vector {
    DVec3::new(x, y, z)
}

// ============================================================================
// Vector arithmetic
// ============================================================================

pub fn vector_add(v1: Vector, v2: Vector) -> Vector {
    v1 + v2
}

pub fn vector_subtract(v1: Vector, v2: Vector) -> Vector {
    v1 - v2
}

/// Component-wise product
pub fn vector_multiply(v1: Vector, v2: Vector) -> Vector {
    v1 * v2
}

/// Component-wise quotient
pub fn vector_divide(v1: Vector, v2: Vector) -> Vector {
    v1 / v2
}

pub fn vector_distance(v1: Vector, v2: Vector) -> f64 {
    v1.distance(v2)
}

/// Interpolate every component between two vectors
pub fn lerp_vector(input: Vector, output: Vector, progress: f64) -> Vector {
    vector(
        lerp(input.x, output.x, progress),
        lerp(input.y, output.y, progress),
        lerp(input.z, output.z, progress),
    )
}

// ============================================================================
// Transforms
// ============================================================================

pub fn translate_vector(v: Vector, t: Vector) -> Vector {
    vector_add(v, t)
}

pub fn translate_path(line: &[Vector], t: Vector) -> Path {
    line.iter().map(|&v| translate_vector(v, t)).collect()
}

pub fn translate_paths(lines: &[Path], t: Vector) -> Vec<Path> {
    lines.iter().map(|line| translate_path(line, t)).collect()
}

/// Uniform scale about the origin
pub fn scale_vector(v: Vector, scale: f64) -> Vector {
    vector_multiply(v, DVec3::splat(scale))
}

pub fn scale_path(line: &[Vector], scale: f64) -> Path {
    line.iter().map(|&v| scale_vector(v, scale)).collect()
}

pub fn scale_paths(lines: &[Path], scale: f64) -> Vec<Path> {
    lines.iter().map(|line| scale_path(line, scale)).collect()
}

/// Rotate about the X axis by `angle` degrees
pub fn rotate_vector_x(v: Vector, angle: f64) -> Vector {
    let (sin, cos) = deg_to_rad(angle).sin_cos();
    let y = v.y * cos - v.z * sin;
    let z = v.z * cos + v.y * sin;
    vector(v.x, y, z)
}

/// Rotate about the Y axis by `angle` degrees
pub fn rotate_vector_y(v: Vector, angle: f64) -> Vector {
    let (sin, cos) = deg_to_rad(angle).sin_cos();
    let x = v.x * cos - v.z * sin;
    let z = v.z * cos + v.x * sin;
    vector(x, v.y, z)
}

/// Rotate about the Z axis by `angle` degrees
pub fn rotate_vector_z(v: Vector, angle: f64) -> Vector {
    let (sin, cos) = deg_to_rad(angle).sin_cos();
    let x = v.x * cos - v.y * sin;
    let y = v.y * cos + v.x * sin;
    vector(x, y, v.z)
}

/// Rotate by per-axis angles in degrees, applied Z, then Y, then X
pub fn rotate_vector_3d(v: Vector, angles: Vector) -> Vector {
    let v = rotate_vector_z(v, angles.z);
    let v = rotate_vector_y(v, angles.y);
    rotate_vector_x(v, angles.x)
}

// ============================================================================
// Shapes
// ============================================================================

/// Axis-aligned box given by two opposite corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vector,
    pub max: Vector,
}

impl BoundingBox {
    pub fn new(min: Vector, max: Vector) -> Self {
        Self { min, max }
    }

    /// Closed outline: top-left, top-right, bottom-right, bottom-left, top-left
    pub fn to_polyline(&self) -> Path {
        let (l, t) = (self.min.x, self.min.y);
        let (r, b) = (self.max.x, self.max.y);
        vec![
            vector(l, t, 0.0),
            vector(r, t, 0.0),
            vector(r, b, 0.0),
            vector(l, b, 0.0),
            vector(l, t, 0.0),
        ]
    }
}

/// Smooth a polyline with a cardinal spline.
///
/// Each input segment is replaced by `segments + 1` samples. `tension` of
/// 0.5 gives a Catmull-Rom curve. Closed curves wrap the end points so the
/// curve joins smoothly at the seam. Paths with fewer than two points are
/// returned unchanged.
pub fn curve_path(path: &[Vector], tension: f64, segments: usize, closed: bool) -> Path {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Vec::new();
    };
    if path.len() < 2 || segments == 0 {
        return path.to_vec();
    }

    let mut line = Vec::with_capacity(path.len() + 3);
    if closed {
        line.push(path[path.len() - 2]);
        line.push(last);
        line.extend_from_slice(path);
        line.push(first);
    } else {
        line.push(first);
        line.extend_from_slice(path);
        line.push(last);
    }

    let mut curve = Vec::with_capacity((line.len() - 3) * (segments + 1));
    for point in 1..line.len() - 2 {
        let t1 = (line[point + 1] - line[point - 1]) * tension;
        let t2 = (line[point + 2] - line[point]) * tension;

        for seg in 0..=segments {
            let step = seg as f64 / segments as f64;
            let step2 = step * step;
            let step3 = step2 * step;

            // Hermite basis
            let c1 = 2.0 * step3 - 3.0 * step2 + 1.0;
            let c2 = -(2.0 * step3) + 3.0 * step2;
            let c3 = step3 - 2.0 * step2 + step;
            let c4 = step3 - step2;

            let x = c1 * line[point].x + c2 * line[point + 1].x + c3 * t1.x + c4 * t2.x;
            let y = c1 * line[point].y + c2 * line[point + 1].y + c3 * t1.y + c4 * t2.y;
            curve.push(vector(x, y, 0.0));
        }
    }

    curve
}
