use std::fmt;

use enum_iterator::Sequence;
use log::{debug, warn};
use polygeom::{PolygonSpec, Vertex, MIN_SIDES};
use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] polygeom::Error),
    #[error("polygon needs at least 1 layer, got {layers}")]
    TooFewLayers { layers: usize },
    #[error("inner layer {inner_layer} must be between 0 and the side count {sides}")]
    InnerLayerOutOfRange { inner_layer: usize, sides: usize },
    #[error("rotation must be finite, got {rotation}")]
    NonFiniteRotation { rotation: f32 },
    #[error("center offset must be finite, got ({}, {})", .offset.x, .offset.y)]
    NonFiniteOffset { offset: Vertex },
    #[error("scale must be positive, got {scale}")]
    InvalidScale { scale: f32 },
    #[error("{name} must be a finite, non-negative length, got {value}")]
    InvalidLength { name: &'static str, value: f32 },
    #[error("value {value} on axis {axis} is outside [0, {max}]")]
    OutOfRange { axis: usize, value: f32, max: f32 },
}

/// Broad classes of [`Error`], for callers that only care whether the
/// configuration, the number of values or a single value was wrong.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    DimensionMismatch,
    Range,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geometry(polygeom::Error::DimensionMismatch { .. }) => {
                ErrorKind::DimensionMismatch
            }
            Self::Geometry(polygeom::Error::InvalidDimMax { .. }) | Self::OutOfRange { .. } => {
                ErrorKind::Range
            }
            Self::Geometry(_)
            | Self::TooFewLayers { .. }
            | Self::InnerLayerOutOfRange { .. }
            | Self::NonFiniteRotation { .. }
            | Self::NonFiniteOffset { .. }
            | Self::InvalidScale { .. }
            | Self::InvalidLength { .. } => ErrorKind::Configuration,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Sequence)]
pub enum ColorRole {
    PolygonStroke,
    InnerFill,
    Spoke,
    DimFill,
    DimStroke,
    DimCircleBackground,
    DimCircle,
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PolygonStroke => "Polygon stroke",
            Self::InnerFill => "Inner fill",
            Self::Spoke => "Spokes",
            Self::DimFill => "Dimension fill",
            Self::DimStroke => "Dimension stroke",
            Self::DimCircleBackground => "Marker background",
            Self::DimCircle => "Marker",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub polygon_stroke: Color,
    pub inner_fill: Color,
    pub spoke: Color,
    pub dim_fill: Color,
    pub dim_stroke: Color,
    pub dim_circle_background: Color,
    pub dim_circle: Color,
}

impl Style {
    pub const fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::PolygonStroke => self.polygon_stroke,
            ColorRole::InnerFill => self.inner_fill,
            ColorRole::Spoke => self.spoke,
            ColorRole::DimFill => self.dim_fill,
            ColorRole::DimStroke => self.dim_stroke,
            ColorRole::DimCircleBackground => self.dim_circle_background,
            ColorRole::DimCircle => self.dim_circle,
        }
    }

    pub fn color_mut(&mut self, role: ColorRole) -> &mut Color {
        match role {
            ColorRole::PolygonStroke => &mut self.polygon_stroke,
            ColorRole::InnerFill => &mut self.inner_fill,
            ColorRole::Spoke => &mut self.spoke,
            ColorRole::DimFill => &mut self.dim_fill,
            ColorRole::DimStroke => &mut self.dim_stroke,
            ColorRole::DimCircleBackground => &mut self.dim_circle_background,
            ColorRole::DimCircle => &mut self.dim_circle,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            polygon_stroke: Color::BLACK,
            inner_fill: Color::LIGHT_GRAY,
            spoke: Color::GRAY,
            dim_fill: Color::rgba(0xFF, 0xDE, 0xAD, 0x44),
            dim_stroke: Color::YELLOW,
            dim_circle_background: Color::WHITE,
            dim_circle: Color::RED,
        }
    }
}

/// Plain settings of a [`PolygonView`], as stored in the config file.
///
/// Lengths are in points. `inner_layer` 0 means no ring is filled.
/// `center_offset` moves the polygon away from the center of its box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub sides: usize,
    pub layers: usize,
    pub inner_layer: usize,
    pub rotation: f32,
    pub corner_radius: f32,
    pub scale: f32,
    pub radius_max: f32,
    pub outer_stroke_width: f32,
    pub dim_circle_radius_background: f32,
    pub dim_circle_radius: f32,
    pub dims: Vec<f32>,
    pub dim_max: f32,
    pub show_dim: bool,
    pub center_offset: Vertex,
    pub style: Style,
}

impl ViewConfig {
    fn effective_radius(&self) -> f32 {
        self.radius_max * self.scale - self.outer_stroke_width * 0.5
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sides: 5,
            layers: 3,
            inner_layer: 0,
            rotation: 0.0,
            corner_radius: 7.0,
            scale: 1.0,
            radius_max: 100.0,
            outer_stroke_width: 2.0,
            dim_circle_radius_background: 5.0,
            dim_circle_radius: 4.0,
            dims: Vec::new(),
            dim_max: 1.0,
            show_dim: false,
            center_offset: Vertex::ORIGIN,
            style: Style::default(),
        }
    }
}

/// Settings of a layered polygon chart plus the values plotted on it.
///
/// Every setter checks the whole configuration before storing anything, so a
/// view that exists is always drawable. Successful changes mark the view dirty.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonView {
    config: ViewConfig,
    dirty: bool,
}

impl PolygonView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ViewConfig) -> Result<Self, Error> {
        validate(config)?;
        Ok(Self {
            config: config.clone(),
            dirty: true,
        })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns whether the view changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn update(&mut self, f: impl FnOnce(&mut ViewConfig)) -> Result<(), Error> {
        let mut next = self.config.clone();
        f(&mut next);
        validate(&next)?;

        if next != self.config {
            self.config = next;
            self.dirty = true;
        }
        Ok(())
    }

    /// Changing the side count drops values that no longer match it and
    /// hides the overlay they fed.
    pub fn set_sides(&mut self, sides: usize) -> Result<(), Error> {
        let stale = self.config.dims.len();
        let drop_dims = stale != 0 && stale != sides;

        self.update(|c| {
            c.sides = sides;
            if drop_dims {
                c.dims.clear();
                c.show_dim = false;
            }
        })?;

        if drop_dims {
            warn!("Cleared {stale} dimension values that did not fit {sides} sides");
        }
        debug!("Polygon sides set to {}", sides);
        Ok(())
    }

    pub fn set_layers(&mut self, layers: usize) -> Result<(), Error> {
        self.update(|c| c.layers = layers)
    }

    pub fn set_inner_layer(&mut self, inner_layer: usize) -> Result<(), Error> {
        self.update(|c| c.inner_layer = inner_layer)
    }

    pub fn set_rotation(&mut self, rotation: f32) -> Result<(), Error> {
        self.update(|c| c.rotation = rotation)
    }

    pub fn set_corner_radius(&mut self, corner_radius: f32) -> Result<(), Error> {
        self.update(|c| c.corner_radius = corner_radius)
    }

    pub fn set_scale(&mut self, scale: f32) -> Result<(), Error> {
        self.update(|c| c.scale = scale)
    }

    pub fn set_radius_max(&mut self, radius_max: f32) -> Result<(), Error> {
        self.update(|c| c.radius_max = radius_max)
    }

    pub fn set_center_offset(&mut self, offset: Vertex) -> Result<(), Error> {
        self.update(|c| c.center_offset = offset)
    }

    pub fn set_outer_stroke_width(&mut self, width: f32) -> Result<(), Error> {
        self.update(|c| c.outer_stroke_width = width)
    }

    pub fn set_dim_circle_radius(&mut self, radius: f32) -> Result<(), Error> {
        self.update(|c| c.dim_circle_radius = radius)
    }

    pub fn set_dim_circle_radius_background(&mut self, radius: f32) -> Result<(), Error> {
        self.update(|c| c.dim_circle_radius_background = radius)
    }

    pub fn set_color(&mut self, role: ColorRole, color: Color) {
        if self.config.style.color(role) != color {
            *self.config.style.color_mut(role) = color;
            self.dirty = true;
        }
    }

    /// One value per side, each within `[0, 1]`.
    pub fn set_dim_percentages(&mut self, percentages: Vec<f32>) -> Result<(), Error> {
        self.set_dim_values(percentages, 1.0)
    }

    /// One value per side, each within `[0, dim_max]`.
    pub fn set_dim_values(&mut self, values: Vec<f32>, dim_max: f32) -> Result<(), Error> {
        if values.len() != self.config.sides {
            return Err(polygeom::Error::DimensionMismatch {
                expected: self.config.sides,
                actual: values.len(),
            }
            .into());
        }

        self.update(|c| {
            c.dims = values;
            c.dim_max = dim_max;
        })
    }

    /// Enabling requires dimension values for every side to be set first.
    pub fn set_show_dim(&mut self, show_dim: bool) -> Result<(), Error> {
        self.update(|c| c.show_dim = show_dim)
    }

    pub fn sides(&self) -> usize {
        self.config.sides
    }

    pub fn layers(&self) -> usize {
        self.config.layers
    }

    pub fn inner_layer(&self) -> usize {
        self.config.inner_layer
    }

    pub fn rotation(&self) -> f32 {
        self.config.rotation
    }

    pub fn corner_radius(&self) -> f32 {
        self.config.corner_radius
    }

    pub fn scale(&self) -> f32 {
        self.config.scale
    }

    pub fn radius_max(&self) -> f32 {
        self.config.radius_max
    }

    pub fn outer_stroke_width(&self) -> f32 {
        self.config.outer_stroke_width
    }

    pub fn dim_circle_radius(&self) -> f32 {
        self.config.dim_circle_radius
    }

    pub fn dim_circle_radius_background(&self) -> f32 {
        self.config.dim_circle_radius_background
    }

    pub fn dims(&self) -> &[f32] {
        &self.config.dims
    }

    pub fn dim_max(&self) -> f32 {
        self.config.dim_max
    }

    pub fn show_dim(&self) -> bool {
        self.config.show_dim
    }

    pub fn center_offset(&self) -> Vertex {
        self.config.center_offset
    }

    pub fn style(&self) -> &Style {
        &self.config.style
    }

    /// Radius of the outermost ring: the scaled maximum radius, pulled in by
    /// half the outer stroke so the stroke stays inside [`Self::preferred_size`].
    pub fn effective_radius(&self) -> f32 {
        self.config.effective_radius()
    }

    /// Width and height the view asks for.
    pub fn preferred_size(&self) -> f32 {
        2.0 * self.config.radius_max * self.config.scale
    }
}

impl Default for PolygonView {
    fn default() -> Self {
        Self {
            config: ViewConfig::default(),
            dirty: true,
        }
    }
}

fn validate(c: &ViewConfig) -> Result<(), Error> {
    if c.sides < MIN_SIDES {
        return Err(polygeom::Error::TooFewSides { sides: c.sides }.into());
    }

    if c.layers < 1 {
        return Err(Error::TooFewLayers { layers: c.layers });
    }

    if c.inner_layer > c.sides {
        return Err(Error::InnerLayerOutOfRange {
            inner_layer: c.inner_layer,
            sides: c.sides,
        });
    }

    if !c.rotation.is_finite() {
        return Err(Error::NonFiniteRotation {
            rotation: c.rotation,
        });
    }

    if !(c.center_offset.x.is_finite() && c.center_offset.y.is_finite()) {
        return Err(Error::NonFiniteOffset {
            offset: c.center_offset,
        });
    }

    if !c.radius_max.is_finite() || c.radius_max <= 0.0 {
        return Err(polygeom::Error::NonPositiveRadius {
            radius: c.radius_max,
        }
        .into());
    }

    if !c.scale.is_finite() || c.scale <= 0.0 {
        return Err(Error::InvalidScale { scale: c.scale });
    }

    let lengths = [
        ("outer stroke width", c.outer_stroke_width),
        ("marker radius", c.dim_circle_radius),
        ("marker background radius", c.dim_circle_radius_background),
    ];
    for (name, value) in lengths {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidLength { name, value });
        }
    }

    let spec = PolygonSpec::new(c.sides, c.effective_radius())?;
    spec.with_corner_radius(c.corner_radius)?;

    if !c.dims.is_empty() || c.show_dim {
        spec.axis_points(&c.dims, c.dim_max)?;

        for (axis, &value) in c.dims.iter().enumerate() {
            if !(0.0..=c.dim_max).contains(&value) {
                return Err(Error::OutOfRange {
                    axis,
                    value,
                    max: c.dim_max,
                });
            }
        }
    }

    Ok(())
}
