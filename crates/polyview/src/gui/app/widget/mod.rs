mod polygon;

pub use polygon::PolygonWidget;
