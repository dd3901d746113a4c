use std::fmt;

use egui::{Color32, WidgetText};
use enum_iterator::{all, Sequence};
use polyview_core::color::Color;

/// Combo box over every variant of `T`. Returns whether the selection changed.
pub fn enum_combo_ui<T>(e: &mut T, label: impl Into<WidgetText>, ui: &mut egui::Ui) -> bool
where
    T: Sequence + Copy + fmt::Display + Eq,
{
    let before = *e;

    egui::ComboBox::from_label(label)
        .selected_text(e.to_string())
        .show_ui(ui, |ui| {
            for val in all::<T>() {
                ui.selectable_value(e, val, val.to_string());
            }
        });

    *e != before
}

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn from_color32(color: Color32) -> Color {
    Color::from(color.to_srgba_unmultiplied())
}
