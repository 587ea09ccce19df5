//! Render-Layer: überträgt den `ConnectorState` in Style-Attribute des Linien-Elements.

pub mod binding;
pub mod style;

pub use binding::{StyleBinding, StyleObserver, SubscriptionId};
pub use style::{static_line_styles, StyleChange, StyleProperty, StyleSnapshot, VISIBLE_CLASS};
