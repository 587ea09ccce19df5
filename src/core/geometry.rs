//! Screen-Space-Grundtypen: Distanzen, Winkel, Seiten-Rechtecke.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Punkt in Seiten-Pixeln (inkl. Scroll-Offset).
pub type ScreenPoint = DVec2;

/// Pixel-Distanz für Style-Attribute oder der Off-Screen-Sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// Konkreter Wert in CSS-Pixeln
    Px(f64),
    /// Element liegt außerhalb der Seite (Wert kommt aus `LineOptions::off_screen_px`)
    OffScreen,
}

impl Distance {
    /// Gibt `true` zurück, wenn der Off-Screen-Sentinel gesetzt ist.
    pub fn is_off_screen(self) -> bool {
        matches!(self, Distance::OffScreen)
    }

    /// Pixelwert, wobei der Sentinel auf `off_screen_px` abgebildet wird.
    pub fn to_px(self, off_screen_px: f64) -> f64 {
        match self {
            Distance::Px(value) => value,
            Distance::OffScreen => off_screen_px,
        }
    }

    /// CSS-Darstellung, z.B. `83.53px` oder `-1000px`.
    pub fn to_css(self, off_screen_px: f64) -> String {
        format!("{}px", self.to_px(off_screen_px))
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::Px(0.0)
    }
}

/// Rotationswinkel in Grad, normalisiert auf `(-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle(f64);

impl Angle {
    /// Erstellt einen Winkel aus Radiant (Ergebnis von `atan2`).
    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    /// Erstellt einen Winkel aus Grad und normalisiert ihn.
    pub fn from_degrees(degrees: f64) -> Self {
        let mut deg = degrees % 360.0;
        if deg <= -180.0 {
            deg += 360.0;
        } else if deg > 180.0 {
            deg -= 360.0;
        }
        Self(deg)
    }

    /// Winkel in Grad
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// CSS-Transform, z.B. `rotate(150.33deg)`.
    pub fn to_css(self) -> String {
        format!("rotate({}deg)", self.0)
    }
}

/// Sichtbarkeit des gebundenen Elements (CSS `display`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// `display: inherit`
    Shown,
    /// `display: none`
    #[default]
    Hidden,
}

impl Display {
    /// CSS-Wert für das `display`-Attribut.
    pub fn css(self) -> &'static str {
        match self {
            Display::Shown => "inherit",
            Display::Hidden => "none",
        }
    }
}

/// Wählt, wie die Y-Koordinate des Zielpunkts am Ziel-Rechteck bestimmt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetAnchor {
    /// `top + top / 2` – historisches Verhalten, bleibt Standard
    #[default]
    LegacyTopOffset,
    /// `top + height / 2` – geometrische Mitte
    Center,
}

/// Bounding-Rechteck eines Elements in Seiten-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PageRect {
    /// Erstellt ein neues Rechteck.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Verschiebt das Rechteck um einen Offset (z.B. Scroll-Position).
    pub fn translated(self, offset: DVec2) -> Self {
        Self {
            left: self.left + offset.x,
            top: self.top + offset.y,
            ..self
        }
    }

    /// Punkt, an dem die Verbindungslinie am Rechteck endet.
    pub fn anchor_point(&self, anchor: TargetAnchor) -> ScreenPoint {
        let x = self.left + self.width / 2.0;
        let y = match anchor {
            TargetAnchor::LegacyTopOffset => self.top + self.top / 2.0,
            TargetAnchor::Center => self.top + self.height / 2.0,
        };
        DVec2::new(x, y)
    }

    /// Prüft ob ein Punkt im Rechteck liegt (inklusiv).
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }
}
