use std::path::PathBuf;

use crossbeam::channel;
use eframe::egui;
use log::{info, warn};
use polyview_core::view::PolygonView;

use self::{
    panel::{
        settings::{Message as SettingsMessage, State as SettingsState},
        LogPanel, SettingsPanel,
    },
    widget::PolygonWidget,
};
use super::log::Message as LogMessage;
use crate::config::Config;

mod panel;
mod widget;

pub struct App {
    log_panel: LogPanel,
    settings_state: Option<SettingsState>,
    view: PolygonView,
    config: Config,
    config_path: PathBuf,
}

impl App {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        log_receiver: channel::Receiver<LogMessage>,
    ) -> Self {
        let view = Self::view_from_config(&config);

        Self {
            log_panel: LogPanel::new(log_receiver),
            settings_state: None,
            view,
            config,
            config_path,
        }
    }

    fn view_from_config(config: &Config) -> PolygonView {
        PolygonView::from_config(&config.view).unwrap_or_else(|e| {
            warn!("Invalid view config ({}), using default", e);
            PolygonView::new()
        })
    }

    pub fn save_config(&mut self) {
        self.config.view = self.view.config().clone();

        match self.config.save(&self.config_path) {
            Ok(()) => info!("Saved config"),
            Err(e) => warn!("Failed to save config: {}", e),
        }
    }

    pub fn reload_config(&mut self) {
        match Config::load(&self.config_path) {
            Ok(config) => {
                self.view = Self::view_from_config(&config);
                self.config = config;
                info!("Reloaded config");
            }
            Err(e) => warn!("Failed to reload config: {}", e),
        }
    }

    fn reset_view(&mut self) {
        self.view = PolygonView::new();
        info!("Restored default view settings");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if panic_log::panicked() {
            frame.close();
        }

        if self.view.take_dirty() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Reset Layout").clicked() {
                        *ui.ctx().memory() = Default::default();
                        ui.close_menu();
                    }

                    if ui.button("Exit").clicked() {
                        frame.close();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("log_panel").show(ctx, |ui| {
            self.log_panel.ui(ui);
        });

        let mut message: Option<SettingsMessage> = None;

        egui::SidePanel::left("settings_panel").show(ctx, |ui| {
            let modified = *self.view.config() != self.config.view;
            let mut panel =
                SettingsPanel::new(&mut self.view, modified, self.settings_state.take());
            panel.ui(ui);

            let (state, m) = panel.into_state();
            message = m;
            self.settings_state = Some(state);
        });

        match message {
            Some(SettingsMessage::Save) => self.save_config(),
            Some(SettingsMessage::Reload) => self.reload_config(),
            Some(SettingsMessage::Defaults) => self.reset_view(),
            None => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.add(PolygonWidget::new(&self.view));
            });
        });
    }
}
