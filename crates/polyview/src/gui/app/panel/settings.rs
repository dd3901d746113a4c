use std::ops::RangeInclusive;

use egui::emath::Numeric;
use log::warn;
use polyview_core::{
    view::{ColorRole, Error, PolygonView},
    Vertex, MIN_SIDES,
};

use crate::gui::{
    util::{enum_combo_ui, from_color32, to_color32},
    ERROR_COLOR,
};

/// Counts the drag values offer. Every ring allocates one vertex per side on
/// each frame, so typed-in counts stay within these.
const SIDES: RangeInclusive<usize> = MIN_SIDES..=64;
const LAYERS: RangeInclusive<usize> = 1..=32;

pub struct SettingsPanel<'a> {
    view: &'a mut PolygonView,
    modified: bool,
    state: State,
}

impl<'a> SettingsPanel<'a> {
    /// `modified` marks the view as differing from the saved config.
    pub fn new(view: &'a mut PolygonView, modified: bool, state: Option<State>) -> Self {
        Self {
            view,
            modified,
            state: state.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn into_state(mut self) -> (State, Option<Message>) {
        let message = self.state.message.take();
        (self.state, message)
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.set_min_width(240.0);

        ui.horizontal(|ui| {
            if self.modified {
                ui.heading("Polygon*")
                    .on_hover_text("Settings differ from the saved config.");
            } else {
                ui.heading("Polygon");
            }
            ui.separator();

            if ui.button("Reload").clicked() {
                self.state.message = Some(Message::Reload);
            }

            if ui.button("Save").clicked() {
                self.state.message = Some(Message::Save);
            }

            if ui.button("Defaults").clicked() {
                self.state.message = Some(Message::Defaults);
            }
        });

        ui.separator();

        if let Some(error) = self.state.error.as_ref() {
            ui.colored_label(ERROR_COLOR, error);
            ui.separator();
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("polygon-settings")
                .num_columns(2)
                .show(ui, |ui| self.shape_ui(ui));

            ui.separator();
            self.color_ui(ui);

            ui.separator();
            self.dims_ui(ui);
        });
    }

    fn shape_ui(&mut self, ui: &mut egui::Ui) {
        let view = &*self.view;
        let (sides, layers, inner_layer) = (view.sides(), view.layers(), view.inner_layer());
        let (rotation, corner_radius, scale) = (view.rotation(), view.corner_radius(), view.scale());
        let (radius_max, outer_stroke_width) = (view.radius_max(), view.outer_stroke_width());
        let (marker, marker_background) =
            (view.dim_circle_radius(), view.dim_circle_radius_background());
        let offset = view.center_offset();

        self.count_row(ui, "Sides", sides, SIDES, PolygonView::set_sides);
        self.count_row(ui, "Layers", layers, LAYERS, PolygonView::set_layers);
        self.count_row(
            ui,
            "Inner layer",
            inner_layer,
            0..=sides,
            PolygonView::set_inner_layer,
        );
        self.drag_row(ui, "Rotation", rotation, 1.0, PolygonView::set_rotation);
        self.drag_row(ui, "Corner radius", corner_radius, 0.1, PolygonView::set_corner_radius);
        self.drag_row(ui, "Scale", scale, 0.01, PolygonView::set_scale);
        self.drag_row(ui, "Max radius", radius_max, 1.0, PolygonView::set_radius_max);
        self.drag_row(ui, "Offset x", offset.x, 1.0, |view, x| {
            view.set_center_offset(Vertex::new(x, offset.y))
        });
        self.drag_row(ui, "Offset y", offset.y, 1.0, |view, y| {
            view.set_center_offset(Vertex::new(offset.x, y))
        });
        self.drag_row(
            ui,
            "Outer stroke",
            outer_stroke_width,
            0.1,
            PolygonView::set_outer_stroke_width,
        );
        self.drag_row(ui, "Marker", marker, 0.1, PolygonView::set_dim_circle_radius);
        self.drag_row(
            ui,
            "Marker background",
            marker_background,
            0.1,
            PolygonView::set_dim_circle_radius_background,
        );
    }

    fn count_row(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        mut value: usize,
        range: RangeInclusive<usize>,
        set: impl FnOnce(&mut PolygonView, usize) -> Result<(), Error>,
    ) {
        ui.label(label);
        let changed = ui
            .add(
                egui::DragValue::new(&mut value)
                    .speed(0.05)
                    .clamp_range(range),
            )
            .changed();
        self.apply(changed, value, set);
        ui.end_row();
    }

    fn drag_row<T: Numeric>(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        mut value: T,
        speed: f64,
        set: impl FnOnce(&mut PolygonView, T) -> Result<(), Error>,
    ) {
        ui.label(label);
        let changed = ui
            .add(egui::DragValue::new(&mut value).speed(speed))
            .changed();
        self.apply(changed, value, set);
        ui.end_row();
    }

    fn apply<T>(
        &mut self,
        changed: bool,
        value: T,
        set: impl FnOnce(&mut PolygonView, T) -> Result<(), Error>,
    ) {
        if changed {
            let result = set(&mut *self.view, value);
            self.report(result);
        }
    }

    fn color_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            enum_combo_ui(&mut self.state.color_role, "", ui);

            let role = self.state.color_role;
            let mut color = to_color32(self.view.style().color(role));
            if ui.color_edit_button_srgba(&mut color).changed() {
                self.view.set_color(role, from_color32(color));
            }
        });
    }

    fn dims_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut show_dim = self.view.show_dim();
            if ui.checkbox(&mut show_dim, "Show dimensions").changed() {
                let result = self.view.set_show_dim(show_dim);
                self.report(result);
            }

            if ui.button("Sample values").clicked() {
                let sides = self.view.sides();
                let sample = (0..sides)
                    .map(|i| (i as f32 + 1.0) / (sides as f32 + 1.0))
                    .collect();
                let result = self.view.set_dim_percentages(sample);
                self.report(result);
            }
        });

        let dim_max = self.view.dim_max();
        let mut dims = self.view.dims().to_vec();
        let mut changed = false;

        for (i, value) in dims.iter_mut().enumerate() {
            changed |= ui
                .add(egui::Slider::new(value, 0.0..=dim_max).text(format!("Axis {}", i + 1)))
                .changed();
        }

        if changed {
            let result = self.view.set_dim_values(dims, dim_max);
            self.report(result);
        }
    }

    fn report(&mut self, result: Result<(), Error>) {
        match result {
            Ok(()) => self.state.error = None,
            Err(e) => {
                warn!("Rejected polygon setting: {}", e);
                self.state.error = Some(e.to_string());
            }
        }
    }
}

pub struct State {
    message: Option<Message>,
    error: Option<String>,
    color_role: ColorRole,
}

impl Default for State {
    fn default() -> Self {
        Self {
            message: None,
            error: None,
            color_role: ColorRole::PolygonStroke,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Message {
    Reload,
    Save,
    Defaults,
}
