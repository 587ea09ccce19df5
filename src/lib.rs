//! InfoBox-Line Library.
//! Verbindungslinie zwischen einem selektierten 3D-Objekt und einer Info-Box,
//! pro Frame aus Kamera- und Seiten-Zustand berechnet.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AnimationScheduler, ConnectorState, Easing, InfoBoxLine, InfoBoxLineBuilder,
    InfoBoxLineViewModel, PropertyTween, Selection, SelectionTracker, SharedScalar,
    TweenCollection,
};
pub use core::{
    Angle, Camera3D, Display, Distance, ElementDisplay, ElementHost, ElementId,
    ElementRectProvider, Page, PageRect, Projector, ScreenPoint, TargetAnchor,
};
pub use render::{StyleBinding, StyleChange, StyleProperty, StyleSnapshot};
pub use shared::LineOptions;
