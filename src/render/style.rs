//! Style-Attribute des Linien-Elements, abgeleitet aus dem `ConnectorState`.

use crate::app::ConnectorState;
use crate::shared::LineOptions;
use std::fmt;

/// CSS-Klasse, die bei sichtbarer Linie gesetzt ist.
pub const VISIBLE_CLASS: &str = "infobox-line-visible";

/// Gebundene, pro Frame veränderliche Attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Top,
    Left,
    Width,
    /// Rotation (`rotate(..deg)`)
    Transform,
    /// Skalierung (`scale(..)`)
    Scale,
    /// Sichtbarkeits-Klasse
    VisibleClass,
    Display,
}

impl StyleProperty {
    /// Reihenfolge, in der Änderungen gemeldet werden.
    pub const ALL: [StyleProperty; 7] = [
        StyleProperty::Top,
        StyleProperty::Left,
        StyleProperty::Width,
        StyleProperty::Transform,
        StyleProperty::Scale,
        StyleProperty::VisibleClass,
        StyleProperty::Display,
    ];

    /// Attribut-Name im Element
    pub fn name(self) -> &'static str {
        match self {
            StyleProperty::Top => "top",
            StyleProperty::Left => "left",
            StyleProperty::Width => "width",
            StyleProperty::Transform => "transform",
            StyleProperty::Scale => "scale",
            StyleProperty::VisibleClass => VISIBLE_CLASS,
            StyleProperty::Display => "display",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geänderter Attribut-Wert eines Frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleChange {
    pub property: StyleProperty,
    pub value: String,
}

/// Vollständige Attribut-Belegung für einen Frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSnapshot {
    pub top: String,
    pub left: String,
    pub width: String,
    pub transform: String,
    pub scale: String,
    pub visible: bool,
    pub display: &'static str,
}

impl StyleSnapshot {
    /// Liest alle gebundenen Felder aus dem Zustand.
    pub fn from_state(state: &ConnectorState, options: &LineOptions) -> Self {
        let off_screen = options.off_screen_px;
        Self {
            top: state.screen_origin_y().to_css(off_screen),
            left: state.screen_origin_x().to_css(off_screen),
            width: state.length().to_css(off_screen),
            transform: state.rotation().to_css(),
            scale: format!("scale({})", state.scale_factor()),
            visible: state.is_visible(),
            display: state.display().css(),
        }
    }

    /// Wert eines einzelnen Attributs als String.
    pub fn value(&self, property: StyleProperty) -> String {
        match property {
            StyleProperty::Top => self.top.clone(),
            StyleProperty::Left => self.left.clone(),
            StyleProperty::Width => self.width.clone(),
            StyleProperty::Transform => self.transform.clone(),
            StyleProperty::Scale => self.scale.clone(),
            StyleProperty::VisibleClass => self.visible.to_string(),
            StyleProperty::Display => self.display.to_string(),
        }
    }

    /// Attribute, die sich gegenüber `previous` geändert haben (alle, wenn `None`).
    pub fn diff(&self, previous: Option<&StyleSnapshot>) -> Vec<StyleChange> {
        StyleProperty::ALL
            .into_iter()
            .filter_map(|property| {
                let value = self.value(property);
                let changed = previous.map_or(true, |prev| prev.value(property) != value);
                changed.then_some(StyleChange { property, value })
            })
            .collect()
    }
}

/// Statische Attribute, die beim Anlegen des Linien-Elements einmal gesetzt werden.
pub fn static_line_styles(options: &LineOptions) -> Vec<(&'static str, String)> {
    vec![
        ("padding", "0px".to_string()),
        ("margin", "0px".to_string()),
        ("height", format!("{}px", options.line_thickness_px)),
        ("background-color", options.line_color_hex()),
        ("line-height", "1px".to_string()),
        ("position", "absolute".to_string()),
    ]
}
