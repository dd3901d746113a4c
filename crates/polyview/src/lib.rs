#![deny(clippy::all)]
pub mod config;
pub mod gui;
