pub mod log;
pub mod settings;

pub use self::{log::LogPanel, settings::SettingsPanel};
