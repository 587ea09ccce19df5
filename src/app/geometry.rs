//! Screen-Space-Geometrie der Verbindungslinie.
//!
//! Die Linie ist ein links verankertes, um seine Mitte rotiertes Rechteck:
//! die linke obere Ecke liegt auf der Segment-Mitte minus halbe Länge
//! (horizontal) bzw. minus halbe Linienstärke (vertikal).

use crate::core::{Angle, PageRect, ScreenPoint, TargetAnchor};
use glam::DVec2;

/// Ergebnis der Linien-Berechnung für einen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorGeometry {
    /// Linke obere Ecke des ungedrehten Linien-Elements
    pub origin: DVec2,
    /// Länge des Segments in Pixeln
    pub length: f64,
    /// Rotation um die Element-Mitte
    pub angle: Angle,
}

/// Berechnet Ursprung, Länge und Winkel zwischen projiziertem Anker und Ziel-Rechteck.
pub fn connector_geometry(
    anchor: ScreenPoint,
    target: &PageRect,
    target_anchor: TargetAnchor,
    half_thickness: f64,
) -> ConnectorGeometry {
    let end = target.anchor_point(target_anchor);
    let delta = anchor - end;
    let length = delta.length();
    let midpoint = (anchor + end) / 2.0;

    ConnectorGeometry {
        origin: DVec2::new(midpoint.x - length / 2.0, midpoint.y - half_thickness),
        length,
        angle: Angle::from_radians(delta.y.atan2(delta.x)),
    }
}
