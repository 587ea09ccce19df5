//! Zeitgesteuerte Property-Tweens für Appear/Depart.
//!
//! Die Linien-Logik kennt nur den `AnimationScheduler`-Vertrag und legt dort
//! Tweens ab. `TweenCollection` ist eine zeitschrittbasierte Implementierung
//! für Host-Loops; die Easing-Kurven leben ausschließlich hier.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Easing-Kurve eines Tweens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    ExponentialOut,
}

impl Easing {
    /// Wendet die Kurve auf einen Fortschritt an (wird auf 0..=1 geklemmt).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Gemeinsam genutzter Skalarwert: ein Schreiber (Scheduler), ein Leser (Render).
///
/// Single-threaded Übergabe ohne Synchronisation, daher `Rc<Cell<_>>`.
#[derive(Clone)]
pub struct SharedScalar(Rc<Cell<f64>>);

impl SharedScalar {
    /// Erstellt einen neuen Wert
    pub fn new(value: f64) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> f64 {
        self.0.get()
    }

    pub fn set(&self, value: f64) {
        self.0.set(value);
    }

    /// Prüft ob beide Handles auf dieselbe Zelle zeigen.
    pub fn same_target(&self, other: &SharedScalar) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Neutrale Skalierung 1.
impl Default for SharedScalar {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PartialEq for SharedScalar {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl fmt::Debug for SharedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedScalar").field(&self.get()).finish()
    }
}

/// Auftrag für einen Property-Tween.
#[derive(Debug, Clone)]
pub struct PropertyTween {
    /// Zu animierender Wert
    pub target: SharedScalar,
    /// Name des Feldes (nur für Logging)
    pub field: &'static str,
    pub from: f64,
    pub to: f64,
    /// Dauer in Sekunden
    pub duration_secs: f64,
    pub easing: Easing,
}

impl PropertyTween {
    /// Wert bei gegebenem Fortschritt (0..=1).
    pub fn value_at(&self, progress: f64) -> f64 {
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

/// Nimmt Tweens entgegen. Fire-and-forget, kein Rückgabewert.
pub trait AnimationScheduler {
    fn add_property_tween(&mut self, tween: PropertyTween);
}

#[derive(Debug)]
struct ActiveTween {
    tween: PropertyTween,
    /// Wird beim ersten `update` nach dem Einreihen gesetzt
    start_time: Option<f64>,
}

/// Zeitschrittbasierter Scheduler: `update(time)` einmal pro Frame aufrufen.
///
/// Pro Ziel-Wert läuft höchstens ein Tween; ein neuer Tween ersetzt den laufenden.
#[derive(Debug, Default)]
pub struct TweenCollection {
    active: Vec<ActiveTween>,
}

impl TweenCollection {
    /// Erstellt eine leere Collection.
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Anzahl laufender Tweens
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Gibt `true` zurück, wenn keine Tweens laufen.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Bricht alle Tweens ab, ohne Werte zu verändern.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Schreibt die Werte aller Tweens für den Zeitpunkt `time_secs`.
    /// Abgeschlossene Tweens setzen ihren Endwert und werden entfernt.
    pub fn update(&mut self, time_secs: f64) {
        self.active.retain_mut(|active| {
            let start = *active.start_time.get_or_insert(time_secs);
            let tween = &active.tween;
            let progress = if tween.duration_secs > 0.0 {
                (time_secs - start) / tween.duration_secs
            } else {
                1.0
            };

            if progress >= 1.0 {
                tween.target.set(tween.to);
                log::debug!("Tween '{}' abgeschlossen bei {}", tween.field, tween.to);
                false
            } else {
                tween.target.set(tween.value_at(progress));
                true
            }
        });
    }
}

impl AnimationScheduler for TweenCollection {
    fn add_property_tween(&mut self, tween: PropertyTween) {
        self.active
            .retain(|active| !active.tween.target.same_target(&tween.target));
        log::debug!(
            "Tween '{}' eingereiht: {} -> {} in {}s",
            tween.field,
            tween.from,
            tween.to,
            tween.duration_secs
        );
        self.active.push(ActiveTween {
            tween,
            start_time: None,
        });
    }
}
