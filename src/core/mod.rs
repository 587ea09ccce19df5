//! Core-Typen: Screen-Space-Geometrie, Projektion, Kamera, Seiten-Elemente.

pub mod camera;
pub mod geometry;
pub mod page;
pub mod projector;

pub use camera::Camera3D;
pub use geometry::{Angle, Display, Distance, PageRect, ScreenPoint, TargetAnchor};
pub use page::{ElementDisplay, ElementHost, ElementId, ElementRectProvider, Page};
pub use projector::Projector;
