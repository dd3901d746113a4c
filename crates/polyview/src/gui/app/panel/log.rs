use crate::gui::log::Message;
use crossbeam::channel;

const MAX_MESSAGES: usize = 1000;

pub struct LogPanel {
    receiver: channel::Receiver<Message>,
    messages: Vec<Message>,
    auto_scroll: bool,
}

impl LogPanel {
    pub fn new(receiver: channel::Receiver<Message>) -> Self {
        Self {
            receiver,
            messages: Vec::new(),
            auto_scroll: true,
        }
    }

    fn receive(&mut self) {
        self.messages.extend(self.receiver.try_iter());

        if self.messages.len() > MAX_MESSAGES {
            let excess = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..excess);
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.receive();

        ui.set_height(110.0);

        ui.horizontal(|ui| {
            ui.heading("Log");
            ui.separator();
            ui.checkbox(&mut self.auto_scroll, "Auto Scroll")
                .on_hover_text(
                "Automatically scroll to view new messages when the scroll bar is at the bottom.",
            );

            if ui.button("Clear").clicked() {
                self.messages.clear();
            }
        });

        ui.separator();

        let row_height = ui.text_style_height(&egui::TextStyle::Body);

        egui::ScrollArea::both()
            .stick_to_bottom(self.auto_scroll)
            .show_rows(ui, row_height, self.messages.len(), |ui, rows| {
                ui.set_width(ui.available_width());
                ui.set_height(ui.available_height());

                let grid = egui::Grid::new("messages").num_columns(3);
                grid.show(ui, |ui| {
                    for message in rows.map(|i| &self.messages[i]) {
                        message.draw(ui);
                        ui.end_row();
                    }
                });
            });
    }
}
