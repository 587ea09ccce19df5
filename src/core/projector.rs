//! Welt → Seiten-Pixel Projektion als injizierbarer Dienst.

use super::ScreenPoint;
use glam::DVec3;

/// Konvertiert einen Welt-Punkt in Seiten-Pixel.
///
/// Liefert `None`, wenn der Punkt nicht sinnvoll projiziert werden kann
/// (hinter der Kamera oder außerhalb des Sichtvolumens).
pub trait Projector {
    fn project(&self, world: DVec3) -> Option<ScreenPoint>;
}

/// Closures sind direkt als Projektor nutzbar (austauschbare Screen-Space-Funktion).
impl<F> Projector for F
where
    F: Fn(DVec3) -> Option<ScreenPoint>,
{
    fn project(&self, world: DVec3) -> Option<ScreenPoint> {
        self(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn closure_acts_as_projector() {
        let projector = |world: DVec3| {
            (world.z >= 0.0).then(|| DVec2::new(world.x * 10.0, world.y * 10.0))
        };

        assert_eq!(
            projector.project(DVec3::new(1.0, 2.0, 0.0)),
            Some(DVec2::new(10.0, 20.0))
        );
        assert_eq!(projector.project(DVec3::new(1.0, 2.0, -1.0)), None);
    }

    #[test]
    fn boxed_projector_dispatches() {
        let boxed: Box<dyn Projector> = Box::new(|_: DVec3| Some(DVec2::new(100.0, 200.0)));
        assert_eq!(boxed.project(DVec3::ZERO), Some(DVec2::new(100.0, 200.0)));
    }
}
