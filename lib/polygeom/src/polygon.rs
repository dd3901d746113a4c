use crate::{axis_points_at, real_radius, vertices_at, Error, Vertex, MIN_SIDES};

/// A validated regular polygon: side count, circumscribed radius, rotation,
/// corner rounding and the offset of its center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolygonSpec {
    side_count: usize,
    radius: f32,
    rotation_degrees: f32,
    corner_radius: f32,
    center_offset: Vertex,
}

impl PolygonSpec {
    pub fn new(side_count: usize, radius: f32) -> Result<Self, Error> {
        if side_count < MIN_SIDES {
            return Err(Error::TooFewSides { sides: side_count });
        }

        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::NonPositiveRadius { radius });
        }

        Ok(Self {
            side_count,
            radius,
            rotation_degrees: 0.0,
            corner_radius: 0.0,
            center_offset: Vertex::ORIGIN,
        })
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_degrees: f32) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f32) -> Result<Self, Error> {
        if !corner_radius.is_finite() || corner_radius < 0.0 || corner_radius >= self.radius {
            return Err(Error::InvalidCornerRadius {
                corner_radius,
                radius: self.radius,
            });
        }

        self.corner_radius = corner_radius;
        Ok(self)
    }

    #[must_use]
    pub fn with_center_offset(mut self, center_offset: Vertex) -> Self {
        self.center_offset = center_offset;
        self
    }

    pub const fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub const fn center_offset(&self) -> Vertex {
        self.center_offset
    }

    pub fn real_radius(&self) -> f32 {
        real_radius(self.radius, self.corner_radius, self.side_count)
    }

    /// Corners placed at [`Self::real_radius`].
    pub fn vertices(&self) -> Vec<Vertex> {
        self.offset(vertices_at(
            self.side_count,
            self.real_radius(),
            self.rotation_degrees,
        ))
    }

    /// Maps one value per side onto the polygon's axes, `dim_max` landing on
    /// the nominal radius.
    pub fn axis_points(&self, dims: &[f32], dim_max: f32) -> Result<Vec<Vertex>, Error> {
        if dims.len() != self.side_count {
            return Err(Error::DimensionMismatch {
                expected: self.side_count,
                actual: dims.len(),
            });
        }

        if !dim_max.is_finite() || dim_max <= 0.0 {
            return Err(Error::InvalidDimMax { dim_max });
        }

        Ok(self.offset(axis_points_at(
            dims,
            self.radius,
            dim_max,
            self.rotation_degrees,
        )))
    }

    fn offset(&self, points: Vec<Vertex>) -> Vec<Vertex> {
        if self.center_offset == Vertex::ORIGIN {
            return points;
        }

        points
            .into_iter()
            .map(|p| p.translate(self.center_offset))
            .collect()
    }
}
