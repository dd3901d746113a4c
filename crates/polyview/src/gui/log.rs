use crossbeam::channel;
use egui::Color32;
use time::{format_description::FormatItem, OffsetDateTime};

use crate::gui::{DEBUG_COLOR, ERROR_COLOR, INFO_COLOR, WARN_COLOR};

/// Targets that flood the log with renderer internals.
#[cfg(feature = "no-log-spam")]
const NOISY_TARGETS: &[&str] = &["wgpu", "naga", "eframe", "egui_wgpu"];
#[cfg(not(feature = "no-log-spam"))]
const NOISY_TARGETS: &[&str] = &[];

/// Forwards log records to the GUI log panel.
pub struct Logger {
    sender: channel::Sender<Message>,
    level: log::LevelFilter,
    ignored_targets: Vec<&'static str>,
}

impl Logger {
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))?;
        Ok(())
    }

    fn ignores(&self, target: &str) -> bool {
        self.ignored_targets
            .iter()
            .any(|prefix| target.starts_with(prefix))
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level().to_level_filter() <= self.level && !self.ignores(metadata.target())
    }

    fn log(&self, record: &log::Record) {
        const TIMESTAMP_FORMAT: &[FormatItem] =
            time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .format(&TIMESTAMP_FORMAT)
            .unwrap_or_default();

        let target = if !record.target().is_empty() {
            record.target()
        } else {
            record.module_path().unwrap_or_default()
        };

        let _ = self.sender.send(Message {
            timestamp,
            level: record.level(),
            message: format!("[{}] {}", target, record.args()),
        });
    }

    fn flush(&self) {}
}

pub struct LoggerBuilder {
    sender: Result<channel::Sender<Message>, BuildError>,
    level: log::LevelFilter,
    ignored_targets: Vec<&'static str>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Result<Logger, BuildError> {
        self.sender.map(|sender| Logger {
            sender,
            level: self.level,
            ignored_targets: self.ignored_targets,
        })
    }

    #[must_use]
    pub fn sender(mut self, sender: channel::Sender<Message>) -> Self {
        self.sender = Ok(sender);
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: log::LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Drops records whose target starts with `prefix`.
    #[must_use]
    pub fn ignore_target(mut self, prefix: &'static str) -> Self {
        self.ignored_targets.push(prefix);
        self
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            sender: Err(BuildError::SenderMissing),
            level: log::LevelFilter::Info,
            ignored_targets: NOISY_TARGETS.to_vec(),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("sender missing")]
    SenderMissing,
}

#[derive(Debug, Clone)]
pub struct Message {
    timestamp: String,
    level: log::Level,
    message: String,
}

impl Message {
    pub fn level(&self) -> log::Level {
        self.level
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn draw(&self, ui: &mut egui::Ui) {
        let Message {
            timestamp,
            level,
            message,
        } = self;

        ui.label(timestamp);

        if let Some(color) = Self::level_color(*level) {
            ui.colored_label(color, level.to_string());
        } else {
            ui.label(level.to_string());
        }

        ui.label(message);
    }

    const fn level_color(level: log::Level) -> Option<Color32> {
        use log::Level;
        match level {
            Level::Error => Some(ERROR_COLOR),
            Level::Warn => Some(WARN_COLOR),
            Level::Info => Some(INFO_COLOR),
            Level::Debug => Some(DEBUG_COLOR),
            Level::Trace => None,
        }
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level && self.message == other.message
    }
}

impl Eq for Message {}

#[cfg(test)]
mod tests {
    use crossbeam::channel;
    use log::{Level, LevelFilter, Log, Record};

    use super::{BuildError, LoggerBuilder};

    #[test]
    fn build_requires_sender() {
        assert_eq!(
            LoggerBuilder::new().build().err(),
            Some(BuildError::SenderMissing)
        );
    }

    #[test]
    fn forwards_enabled_records() {
        let (tx, rx) = channel::unbounded();
        let logger = LoggerBuilder::new()
            .sender(tx)
            .with_level(LevelFilter::Info)
            .ignore_target("noisy")
            .build()
            .unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("saved config"))
                .level(Level::Info)
                .target("polyview::gui")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("too chatty"))
                .level(Level::Debug)
                .target("polyview::gui")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("frame stats"))
                .level(Level::Warn)
                .target("noisy::backend")
                .build(),
        );

        let messages: Vec<_> = rx.try_iter().collect();
        assert_eq!(messages.len(), 1, "only the info record should pass");
        assert_eq!(messages[0].level(), Level::Info);
        assert_eq!(messages[0].text(), "[polyview::gui] saved config");
    }
}
