#![deny(clippy::all)]
#![windows_subsystem = "windows"]

use std::error::Error;

use polyview::gui;

pub fn main() -> Result<(), Box<dyn Error>> {
    std::panic::set_hook(Box::new(panic_log::hook));

    gui::run()
}
