use polygeom::{layer_radius, PolygonSpec, Vertex};

use crate::{color::Color, path::Path, view::PolygonView};

const SPOKE_WIDTH: f32 = 1.0;
const LAYER_WIDTH: f32 = 1.0;

/// Something the chart can be drawn onto. Coordinates are relative to the
/// center of the drawing area; implementations translate them into their own
/// space.
pub trait Surface {
    fn stroke_path(&mut self, path: &Path, color: Color, width: f32);

    /// Fills the closed outline of `path`. Outlines passed here are
    /// star-shaped around `center`: every ray from `center` crosses them
    /// once, even where the outline is concave.
    fn fill_path(&mut self, path: &Path, center: Vertex, color: Color);

    fn draw_circle(&mut self, center: Vertex, radius: f32, color: Color);
}

/// Draws spokes, rings and, when enabled, the dimension overlay of `view`.
///
/// Geometry is recomputed from the view on every call.
pub fn render<S: Surface + ?Sized>(view: &PolygonView, surface: &mut S) {
    let sides = view.sides();
    let layers = view.layers();
    let radius_max = view.effective_radius();
    let center = view.center_offset();
    let style = view.style();

    let place = |spec: PolygonSpec| {
        spec.with_rotation(view.rotation())
            .with_center_offset(center)
    };

    let ring = |index: usize| {
        let spec = match PolygonSpec::new(sides, layer_radius(radius_max, index, layers)) {
            Ok(spec) => place(spec),
            // Ring 0 has no radius.
            Err(_) => return (vec![center; sides], 0.0),
        };

        let corner_radius = layer_radius(view.corner_radius(), index, layers);
        let spec = spec.with_corner_radius(corner_radius).unwrap_or(spec);
        (spec.vertices(), spec.corner_radius())
    };

    let mut path = Path::new();

    // Spokes from the inner ring out to the outermost one.
    let (inner, _) = ring(view.inner_layer());
    let (outer, _) = ring(layers);
    for (&from, &to) in inner.iter().zip(&outer) {
        path.clear();
        path.segment(from, to);
        surface.stroke_path(&path, style.spoke, SPOKE_WIDTH);
    }

    for index in 1..=layers {
        let (vertices, corner_radius) = ring(index);
        path.clear();
        path.rounded_polygon(&vertices, corner_radius);

        if index == view.inner_layer() {
            surface.fill_path(&path, center, style.inner_fill);
        }

        let width = if index == layers {
            view.outer_stroke_width()
        } else {
            LAYER_WIDTH
        };
        surface.stroke_path(&path, style.polygon_stroke, width);
    }

    if !view.show_dim() {
        return;
    }

    let points = match PolygonSpec::new(sides, radius_max)
        .and_then(|spec| place(spec).axis_points(view.dims(), view.dim_max()))
    {
        Ok(points) => points,
        Err(_) => return,
    };

    path.clear();
    path.polygon(&points);
    surface.fill_path(&path, center, style.dim_fill);
    surface.stroke_path(&path, style.dim_stroke, view.outer_stroke_width());

    for &point in &points {
        surface.draw_circle(
            point,
            view.dim_circle_radius_background(),
            style.dim_circle_background,
        );
        surface.draw_circle(point, view.dim_circle_radius(), style.dim_circle);
    }
}
