//! 3D-Perspektiv-Kamera mit Welt → Seiten-Pixel Projektion.

use super::{PageRect, Projector, ScreenPoint};
use glam::{DMat4, DQuat, DVec2, DVec3};

/// Perspektiv-Kamera, die auf eine Canvas-Fläche der Seite projiziert
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Augpunkt in Welt-Koordinaten
    pub eye: DVec3,
    /// Blickziel in Welt-Koordinaten
    pub target: DVec3,
    /// Oben-Vektor
    pub up: DVec3,
    /// Vertikaler Öffnungswinkel in Radiant
    pub fov_y: f64,
    /// Near-Plane-Abstand
    pub near: f64,
    /// Far-Plane-Abstand
    pub far: f64,
    /// Canvas-Rechteck in Seiten-Koordinaten
    pub canvas: PageRect,
}

impl Camera3D {
    /// Standard-Öffnungswinkel in Grad.
    pub const DEFAULT_FOV_Y_DEG: f64 = 60.0;
    /// Standard-Near-Plane.
    pub const DEFAULT_NEAR: f64 = 0.1;
    /// Standard-Far-Plane.
    pub const DEFAULT_FAR: f64 = 10_000.0;
    /// Abstand des Augpunkts vom Ursprung bei `new`.
    pub const DEFAULT_DISTANCE: f64 = 10.0;

    /// Erstellt eine Kamera, die von +Z auf den Ursprung blickt.
    pub fn new(canvas: PageRect) -> Self {
        Self {
            eye: DVec3::new(0.0, 0.0, Self::DEFAULT_DISTANCE),
            target: DVec3::ZERO,
            up: DVec3::Y,
            fov_y: Self::DEFAULT_FOV_Y_DEG.to_radians(),
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
            canvas,
        }
    }

    /// Richtet die Kamera auf einen Punkt aus
    pub fn look_at(&mut self, target: DVec3) {
        self.target = target;
    }

    /// Rotiert den Augpunkt um die Oben-Achse durch das Blickziel.
    pub fn orbit(&mut self, angle_radians: f64) {
        let rotation = DQuat::from_axis_angle(self.up.normalize(), angle_radians);
        self.eye = self.target + rotation * (self.eye - self.target);
    }

    /// View-Matrix (rechtshändig)
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projektions-Matrix, Aspekt aus der Canvas-Größe.
    pub fn projection_matrix(&self) -> DMat4 {
        let aspect = self.canvas.width / self.canvas.height.max(1.0);
        DMat4::perspective_rh_gl(self.fov_y, aspect.max(f64::EPSILON), self.near, self.far)
    }

    /// Konvertiert Welt-Koordinaten zu Seiten-Pixeln.
    ///
    /// `None` für Punkte hinter der Kamera oder außerhalb des Sichtvolumens.
    /// Y wächst nach unten wie im Seiten-Layout.
    pub fn world_to_screen(&self, world: DVec3) -> Option<ScreenPoint> {
        let clip = self.projection_matrix() * self.view_matrix() * world.extend(1.0);
        if clip.w <= f64::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 || ndc.z.abs() > 1.0 {
            return None;
        }
        Some(DVec2::new(
            self.canvas.left + (ndc.x + 1.0) * 0.5 * self.canvas.width,
            self.canvas.top + (1.0 - ndc.y) * 0.5 * self.canvas.height,
        ))
    }
}

impl Projector for Camera3D {
    fn project(&self, world: DVec3) -> Option<ScreenPoint> {
        self.world_to_screen(world)
    }
}
