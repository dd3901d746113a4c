#![deny(clippy::all)]
//! Vertex math for regular polygons and the per-axis points plotted on them.
//!
//! Angles are in degrees and grow in the direction of the positive y axis, so
//! with a y-down screen the polygon winds clockwise. Everything is computed in
//! `f64` and stored as `f32`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

pub use polygon::PolygonSpec;

mod polygon;

pub const MIN_SIDES: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("polygon needs at least 3 sides, got {sides}")]
    TooFewSides { sides: usize },
    #[error("radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f32 },
    #[error("corner radius {corner_radius} must be at least 0 and less than the radius {radius}")]
    InvalidCornerRadius { corner_radius: f32, radius: f32 },
    #[error("expected {expected} dimension values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("dimension maximum must be positive, got {dim_max}")]
    InvalidDimMax { dim_max: f32 },
}

/// A point relative to the polygon center.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn polar(radius: f64, degrees: f64) -> Self {
        let (sin, cos) = to_radians(degrees).sin_cos();
        Self::new((radius * cos) as f32, (radius * sin) as f32)
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(self, other: Self) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn translate(self, offset: Self) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            (other.x - self.x).mul_add(t, self.x),
            (other.y - self.y).mul_add(t, self.y),
        )
    }
}

pub fn to_radians(degrees: f64) -> f64 {
    2.0 * PI * degrees / 360.0
}

/// Angle between two neighboring axes, in degrees.
pub fn angle_step(side_count: usize) -> f64 {
    360.0 / side_count as f64
}

/// Corners of a regular polygon on a circle of `radius`, starting at
/// `rotation_degrees` and stepping `360 / side_count` degrees each.
///
/// No validation happens here; see [`PolygonSpec`] for the checked form.
pub fn vertices_at(side_count: usize, radius: f32, rotation_degrees: f32) -> Vec<Vertex> {
    let step = angle_step(side_count);
    let radius = f64::from(radius);

    (0..side_count)
        .map(|i| i as f64 * step + f64::from(rotation_degrees))
        .map(|angle| Vertex::polar(radius, angle))
        .collect()
}

/// Radius to place the corners at so that corners rounded with
/// `corner_radius` still fit inside `radius`.
///
/// A `corner_radius` of zero returns `radius` unchanged.
pub fn real_radius(radius: f32, corner_radius: f32, side_count: usize) -> f32 {
    let half_interior_angle = 90.0 - angle_step(side_count) / 2.0;
    let corner_radius = f64::from(corner_radius);
    let pull = corner_radius / to_radians(half_interior_angle).sin() - corner_radius;

    (f64::from(radius) - pull) as f32
}

/// One point per value, on the axis of the same index, at a distance of
/// `dims[i] * radius_max / dim_max` from the center.
pub fn axis_points_at(
    dims: &[f32],
    radius_max: f32,
    dim_max: f32,
    rotation_degrees: f32,
) -> Vec<Vertex> {
    let step = angle_step(dims.len());
    let scale = f64::from(radius_max) / f64::from(dim_max);

    dims.iter()
        .enumerate()
        .map(|(i, &dim)| {
            let angle = i as f64 * step + f64::from(rotation_degrees);
            Vertex::polar(f64::from(dim) * scale, angle)
        })
        .collect()
}

/// Radius of ring `index` out of `layer_count` evenly spaced rings.
pub fn layer_radius(radius_max: f32, index: usize, layer_count: usize) -> f32 {
    radius_max * index as f32 / layer_count as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn angle_of(v: Vertex) -> f32 {
        v.y.atan2(v.x).to_degrees().rem_euclid(360.0)
    }

    fn assert_close(actual: Vertex, expected: Vertex) {
        assert!(
            actual.distance_to(expected) < EPSILON,
            "expected {actual:?} to be close to {expected:?}"
        );
    }

    #[test]
    fn vertices_sit_on_circle_with_even_spacing() {
        for sides in 3..=12 {
            for radius in [0.5, 1.0, 100.0, 1234.5] {
                let vertices = vertices_at(sides, radius, 0.0);
                assert_eq!(vertices.len(), sides);

                let step = angle_step(sides) as f32;
                for (i, v) in vertices.iter().enumerate() {
                    assert!(
                        (v.length() - radius).abs() < radius * 1e-5,
                        "vertex {i} of {sides}-gon at {v:?} is not on radius {radius}"
                    );

                    let next = vertices[(i + 1) % sides];
                    let spacing = (angle_of(next) - angle_of(*v)).rem_euclid(360.0);
                    assert!(
                        (spacing - step).abs() < 1e-2,
                        "spacing {spacing} between vertex {i} and next of {sides}-gon should be {step}"
                    );
                }
            }
        }
    }

    #[test]
    fn pentagon_matches_known_coordinates() {
        let vertices = vertices_at(5, 100.0, 0.0);

        assert_close(vertices[0], Vertex::new(100.0, 0.0));
        assert_close(vertices[1], Vertex::new(30.9017, 95.10565));
    }

    #[test]
    fn rotating_by_one_step_is_a_cyclic_shift() {
        for sides in 3..=9 {
            let step = angle_step(sides) as f32;
            for rotation in [0.0, 17.5, -40.0] {
                let base = vertices_at(sides, 50.0, rotation);
                let rotated = vertices_at(sides, 50.0, rotation + step);

                for i in 0..sides {
                    assert_close(rotated[i], base[(i + 1) % sides]);
                }
            }
        }
    }

    #[test]
    fn rotation_is_taken_mod_360() {
        let a = vertices_at(6, 10.0, 30.0);
        let b = vertices_at(6, 10.0, 390.0);

        for (a, b) in a.into_iter().zip(b) {
            assert_close(a, b);
        }
    }

    #[test]
    fn real_radius_without_rounding_is_exact() {
        for sides in 3..=10 {
            assert_eq!(real_radius(100.0, 0.0, sides), 100.0);
        }
    }

    #[test]
    fn real_radius_pulls_corners_inward() {
        // Square: half interior angle is 45 degrees.
        let expected = 100.0 - (10.0 / std::f32::consts::FRAC_1_SQRT_2 - 10.0);
        assert!((real_radius(100.0, 10.0, 4) - expected).abs() < EPSILON);

        let tests = [(3, 5.0), (5, 7.0), (8, 2.0)];
        for (sides, corner) in tests {
            let r = real_radius(80.0, corner, sides);
            assert!(
                r < 80.0,
                "rounded {sides}-gon with corner {corner} should shrink, got {r}"
            );
        }
    }

    #[test]
    fn real_radius_shrinks_less_with_more_sides() {
        let triangle = real_radius(100.0, 10.0, 3);
        let octagon = real_radius(100.0, 10.0, 8);

        assert!(triangle < octagon, "{triangle} should be below {octagon}");
    }

    #[test]
    fn axis_points_scale_linearly() {
        let points = axis_points_at(&[0.0, 50.0, 100.0, 50.0], 100.0, 100.0, 0.0);
        let expected = [
            Vertex::new(0.0, 0.0),
            Vertex::new(0.0, 50.0),
            Vertex::new(-100.0, 0.0),
            Vertex::new(0.0, -50.0),
        ];

        for (point, expected) in points.into_iter().zip(expected) {
            assert_close(point, expected);
        }
    }

    #[test]
    fn axis_point_radius_is_proportional_to_value() {
        for axis in 0..6 {
            let mut dims = [0.0; 6];
            let mut lengths = Vec::new();
            for value in [0.0, 0.25, 0.5, 1.0] {
                dims[axis] = value;
                lengths.push(axis_points_at(&dims, 80.0, 1.0, 12.0)[axis].length());
            }

            assert!(lengths[0] < EPSILON, "zero should map to the center");
            assert!((lengths[1] - 20.0).abs() < EPSILON);
            assert!((lengths[2] - 40.0).abs() < EPSILON);
            assert!((lengths[3] - 80.0).abs() < EPSILON);
        }
    }

    #[test]
    fn axis_points_follow_polygon_rotation() {
        let vertices = vertices_at(7, 60.0, 33.0);
        let points = axis_points_at(&[1.0; 7], 60.0, 1.0, 33.0);

        for (v, p) in vertices.into_iter().zip(points) {
            assert_close(v, p);
        }
    }

    #[test]
    fn layer_radii_are_evenly_spaced() {
        let radii: Vec<_> = (0..=3).map(|i| layer_radius(90.0, i, 3)).collect();
        assert_eq!(radii, vec![0.0, 30.0, 60.0, 90.0]);
    }

    #[test]
    fn computing_twice_is_identical() {
        assert_eq!(vertices_at(9, 42.0, 7.0), vertices_at(9, 42.0, 7.0));
        assert_eq!(
            axis_points_at(&[0.1, 0.9, 0.4], 10.0, 1.0, 5.0),
            axis_points_at(&[0.1, 0.9, 0.4], 10.0, 1.0, 5.0)
        );
    }
}
