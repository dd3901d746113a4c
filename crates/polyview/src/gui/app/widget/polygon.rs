use eframe::epaint;
use egui::{Color32, Pos2, Sense, Shape, Stroke, Vec2};
use polyview_core::{
    color::Color,
    path::Path,
    render::{self, Surface},
    view::PolygonView,
    Vertex,
};

use crate::gui::util::to_color32;

/// Straight pieces each rounded corner is drawn with.
const CURVE_SEGMENTS: usize = 8;

pub struct PolygonWidget<'a> {
    view: &'a PolygonView,
}

impl<'a> PolygonWidget<'a> {
    pub fn new(view: &'a PolygonView) -> Self {
        Self { view }
    }
}

impl egui::Widget for PolygonWidget<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let size = Vec2::splat(self.view.preferred_size());
        let (rect, response) = ui.allocate_exact_size(size, Sense::focusable_noninteractive());

        if ui.is_rect_visible(response.rect) {
            let mut surface = PainterSurface {
                painter: ui.painter(),
                center: rect.center(),
            };
            render::render(self.view, &mut surface);
        }

        response
    }
}

/// Draws onto an egui painter with the origin at `center`.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    center: Pos2,
}

impl PainterSurface<'_> {
    fn to_screen(&self, v: Vertex) -> Pos2 {
        self.center + Vec2::new(v.x, v.y)
    }
}

impl Surface for PainterSurface<'_> {
    fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        let stroke = Stroke::new(width, to_color32(color));

        for subpath in path.flatten(CURVE_SEGMENTS) {
            let points = subpath.points.iter().map(|&v| self.to_screen(v)).collect();

            self.painter.add(epaint::PathShape {
                points,
                closed: subpath.closed,
                fill: Color32::TRANSPARENT,
                stroke,
            });
        }
    }

    fn fill_path(&mut self, path: &Path, center: Vertex, color: Color) {
        let center = self.to_screen(center);
        let color = to_color32(color);

        for subpath in path.flatten(CURVE_SEGMENTS) {
            let points: Vec<Pos2> = subpath.points.iter().map(|&v| self.to_screen(v)).collect();
            self.painter
                .add(Shape::mesh(fan_mesh(center, &points, color)));
        }
    }

    fn draw_circle(&mut self, center: Vertex, radius: f32, color: Color) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }
}

/// Triangle fan from `center` over the closed outline `points`.
///
/// egui's own path fill only handles convex outlines. A fan from the center
/// covers any outline that is star-shaped around it, concave or not.
fn fan_mesh(center: Pos2, points: &[Pos2], color: Color32) -> epaint::Mesh {
    let mut mesh = epaint::Mesh::default();
    if points.len() < 3 {
        return mesh;
    }

    mesh.colored_vertex(center, color);
    for &p in points {
        mesh.colored_vertex(p, color);
    }

    let n = points.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use egui::{pos2, Color32, Pos2};
    use polyview_core::Vertex;

    use super::fan_mesh;

    fn to_pos(v: Vertex) -> Pos2 {
        pos2(200.0 + v.x, 200.0 + v.y)
    }

    /// Radar outline with radius 100 per unit value.
    fn outline(dims: &[f32]) -> Vec<Pos2> {
        let step = 360.0 / dims.len() as f32;
        dims.iter()
            .enumerate()
            .map(|(i, &d)| {
                let (sin, cos) = (i as f32 * step).to_radians().sin_cos();
                to_pos(Vertex::new(100.0 * d * cos, 100.0 * d * sin))
            })
            .collect()
    }

    fn polygon_area(points: &[Pos2]) -> f32 {
        let n = points.len();
        let twice: f32 = (0..n)
            .map(|i| {
                let (a, b) = (points[i], points[(i + 1) % n]);
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() / 2.0
    }

    fn triangle_area(a: Pos2, b: Pos2, c: Pos2) -> f32 {
        ((b - a).x * (c - a).y - (b - a).y * (c - a).x).abs() / 2.0
    }

    #[test]
    fn fan_covers_concave_outline_exactly() {
        let center = to_pos(Vertex::ORIGIN);
        let points = outline(&[1.0, 0.1, 1.0, 0.1, 1.0]);

        let mesh = fan_mesh(center, &points, Color32::RED);
        assert_eq!(mesh.vertices.len(), points.len() + 1);
        assert_eq!(mesh.indices.len(), 3 * points.len());

        let covered: f32 = mesh
            .indices
            .chunks(3)
            .map(|t| {
                let pos = |i: u32| mesh.vertices[i as usize].pos;
                triangle_area(pos(t[0]), pos(t[1]), pos(t[2]))
            })
            .sum();
        let expected = polygon_area(&points);

        assert!(
            (covered - expected).abs() < expected * 1e-4,
            "fan covers {covered}, outline encloses {expected}"
        );

        // Fanning from the first vertex instead overfills the notches.
        let from_first: f32 = (1..points.len() - 1)
            .map(|i| triangle_area(points[0], points[i], points[i + 1]))
            .sum();
        assert!(from_first > expected * 1.2, "{from_first} vs {expected}");
    }

    #[test]
    fn degenerate_outline_yields_empty_mesh() {
        let points = [pos2(0.0, 0.0), pos2(1.0, 1.0)];
        let mesh = fan_mesh(pos2(0.0, 0.0), &points, Color32::WHITE);

        assert!(mesh.vertices.is_empty() && mesh.indices.is_empty());
    }
}
