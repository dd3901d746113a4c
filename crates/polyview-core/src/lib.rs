#![deny(clippy::all)]
pub mod color;
pub mod path;
pub mod render;
pub mod view;

pub use polygeom::{Vertex, MIN_SIDES};
