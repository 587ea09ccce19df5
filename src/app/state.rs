//! Beobachtbarer Zustand der Verbindungslinie.

use super::animation::SharedScalar;
use super::geometry::ConnectorGeometry;
use crate::core::{Angle, Display, Distance};
use glam::DVec3;

/// Zustand, den die Geometrie-Berechnung pro Frame schreibt und der Render-Layer liest.
///
/// Nur Anker-Position und Selektions-Flag sind von außen setzbar; alle anderen
/// Felder sind abgeleitet und nur lesend zugänglich.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorState {
    anchor_world_position: Option<DVec3>,
    show_selection: bool,
    screen_origin_x: Distance,
    screen_origin_y: Distance,
    length: Distance,
    rotation: Angle,
    scale: SharedScalar,
    /// `None` bis zum ersten Schreiben auf das Element
    display: Option<Display>,
}

impl ConnectorState {
    /// Erstellt den Ausgangszustand: unsichtbar, außerhalb der Seite, Skalierung 1.
    pub fn new() -> Self {
        Self {
            anchor_world_position: None,
            show_selection: false,
            screen_origin_x: Distance::OffScreen,
            screen_origin_y: Distance::OffScreen,
            length: Distance::Px(0.0),
            rotation: Angle::default(),
            scale: SharedScalar::default(),
            display: None,
        }
    }

    /// Welt-Position des selektierten Objekts
    pub fn anchor_world_position(&self) -> Option<DVec3> {
        self.anchor_world_position
    }

    pub fn set_anchor_world_position(&mut self, position: Option<DVec3>) {
        self.anchor_world_position = position;
    }

    /// Selektions-Sichtbarkeit (von außen geschaltet)
    pub fn show_selection(&self) -> bool {
        self.show_selection
    }

    pub fn set_show_selection(&mut self, show: bool) {
        self.show_selection = show;
    }

    /// Sichtbar nur bei aktiver Selektion mit bekannter Position.
    ///
    /// Kann `false` sein obwohl ein Objekt selektiert ist, wenn es keine Position hat.
    pub fn is_visible(&self) -> bool {
        self.show_selection && self.anchor_world_position.is_some()
    }

    pub fn screen_origin_x(&self) -> Distance {
        self.screen_origin_x
    }

    pub fn screen_origin_y(&self) -> Distance {
        self.screen_origin_y
    }

    /// Gerenderte Linienlänge
    pub fn length(&self) -> Distance {
        self.length
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    /// Aktuelle Skalierung (vom Animations-Scheduler geschrieben).
    pub fn scale_factor(&self) -> f64 {
        self.scale.get()
    }

    /// Handle auf die Skalierung für Tweens.
    pub fn scale_handle(&self) -> SharedScalar {
        self.scale.clone()
    }

    /// Sichtbarkeit des Linien-Elements (ausgeblendet, solange nichts geschrieben wurde)
    pub fn display(&self) -> Display {
        self.display.unwrap_or(Display::Hidden)
    }

    /// Zuletzt auf das Element geschriebener Wert
    pub(crate) fn written_display(&self) -> Option<Display> {
        self.display
    }

    pub(crate) fn set_display(&mut self, display: Display) {
        self.display = Some(display);
    }

    pub(crate) fn set_off_screen(&mut self) {
        self.screen_origin_x = Distance::OffScreen;
        self.screen_origin_y = Distance::OffScreen;
    }

    pub(crate) fn apply_geometry(&mut self, geometry: &ConnectorGeometry) {
        self.screen_origin_x = Distance::Px(geometry.origin.x);
        self.screen_origin_y = Distance::Px(geometry.origin.y);
        self.length = Distance::Px(geometry.length);
        self.rotation = geometry.angle;
    }
}

impl Default for ConnectorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn new_state_is_hidden_and_off_screen() {
        let state = ConnectorState::new();

        assert!(!state.is_visible());
        assert!(state.screen_origin_x().is_off_screen());
        assert!(state.screen_origin_y().is_off_screen());
        assert_eq!(state.length(), Distance::Px(0.0));
        assert_eq!(state.rotation().degrees(), 0.0);
        assert_eq!(state.scale_factor(), 1.0);
        assert_eq!(state.display(), Display::Hidden);
        assert_eq!(state.written_display(), None);
    }

    #[test]
    fn visibility_is_derived_from_flag_and_position() {
        let mut state = ConnectorState::new();

        state.set_show_selection(true);
        assert!(!state.is_visible());

        state.set_anchor_world_position(Some(DVec3::new(1.0, 2.0, 3.0)));
        assert!(state.is_visible());

        state.set_show_selection(false);
        assert!(!state.is_visible());
    }

    #[test]
    fn off_screen_keeps_length_and_rotation() {
        let mut state = ConnectorState::new();
        state.apply_geometry(&ConnectorGeometry {
            origin: DVec2::new(10.0, 20.0),
            length: 30.0,
            angle: Angle::from_degrees(45.0),
        });

        state.set_off_screen();

        assert!(state.screen_origin_x().is_off_screen());
        assert_eq!(state.length(), Distance::Px(30.0));
        assert_eq!(state.rotation().degrees(), 45.0);
    }

    #[test]
    fn scale_handle_writes_through() {
        let state = ConnectorState::new();
        state.scale_handle().set(1.75);
        assert_eq!(state.scale_factor(), 1.75);
    }
}
