//! Application-Layer: Zustand, Geometrie-Update, Animation, Widget und Selektion.

pub mod animation;
pub mod geometry;
pub mod selection;
pub mod state;
pub mod view_model;
pub mod widget;

pub use animation::{AnimationScheduler, Easing, PropertyTween, SharedScalar, TweenCollection};
pub use geometry::{connector_geometry, ConnectorGeometry};
pub use selection::{Selection, SelectionTracker};
pub use state::ConnectorState;
pub use view_model::InfoBoxLineViewModel;
pub use widget::{InfoBoxLine, InfoBoxLineBuilder};
