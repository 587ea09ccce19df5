//! Überträgt Selektionswechsel des Hosts auf die Info-Box-Linie.

use super::animation::AnimationScheduler;
use super::view_model::InfoBoxLineViewModel;
use glam::DVec3;

/// Selektiertes Szenen-Objekt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Stabile Objekt-ID (Wechsel löst Appear aus)
    pub id: u64,
    /// Aktuelle Welt-Position
    pub position: DVec3,
}

/// Verfolgt die aktuelle Selektion und triggert Appear/Depart.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    current: Option<u64>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID des aktuell selektierten Objekts
    pub fn selected_id(&self) -> Option<u64> {
        self.current
    }

    pub fn has_selection(&self) -> bool {
        self.current.is_some()
    }

    /// Setzt oder löscht die Selektion.
    ///
    /// Neues Objekt → Anker setzen, einblenden, Appear.
    /// Keine Selektion mehr → Depart, ausblenden; der letzte Anker bleibt stehen.
    pub fn select(
        &mut self,
        view_model: &mut InfoBoxLineViewModel,
        scheduler: &mut dyn AnimationScheduler,
        selection: Option<Selection>,
    ) {
        match selection {
            Some(selection) => {
                view_model.set_position(Some(selection.position));
                view_model.set_show_selection(true);
                if self.current != Some(selection.id) {
                    log::debug!("Selektion gewechselt: {:?} -> {}", self.current, selection.id);
                    view_model.animate_appear(scheduler);
                    self.current = Some(selection.id);
                }
            }
            None => {
                if let Some(previous) = self.current.take() {
                    log::debug!("Selektion {} aufgehoben", previous);
                    view_model.animate_depart(scheduler);
                }
                view_model.set_show_selection(false);
            }
        }
    }

    /// Aktualisiert die Welt-Position des selektierten Objekts (pro Tick, ohne Animation).
    ///
    /// Gibt `false` zurück, wenn nichts selektiert ist.
    pub fn move_anchor(&self, view_model: &mut InfoBoxLineViewModel, position: DVec3) -> bool {
        if self.current.is_none() {
            return false;
        }
        view_model.set_position(Some(position));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::animation::{PropertyTween, TweenCollection};
    use crate::core::{ElementHost, ElementId, Page};
    use crate::shared::LineOptions;
    use glam::DVec2;

    #[derive(Default)]
    struct CountingScheduler {
        targets: Vec<f64>,
    }

    impl AnimationScheduler for CountingScheduler {
        fn add_property_tween(&mut self, tween: PropertyTween) {
            self.targets.push(tween.to);
        }
    }

    fn view_model() -> InfoBoxLineViewModel {
        let mut page = Page::new();
        let body = page.body();
        let line: ElementId = page.create_element(body);
        let target = page.create_element(body);
        InfoBoxLineViewModel::new(
            Box::new(|_: DVec3| Some(DVec2::ZERO)),
            LineOptions::default(),
            line,
            target,
        )
    }

    fn selection(id: u64) -> Option<Selection> {
        Some(Selection {
            id,
            position: DVec3::new(id as f64, 0.0, 0.0),
        })
    }

    #[test]
    fn selecting_new_object_shows_line_and_appears() {
        let mut vm = view_model();
        let mut tracker = SelectionTracker::new();
        let mut scheduler = CountingScheduler::default();

        tracker.select(&mut vm, &mut scheduler, selection(7));

        assert!(vm.is_visible());
        assert_eq!(vm.position(), Some(DVec3::new(7.0, 0.0, 0.0)));
        assert_eq!(scheduler.targets, vec![1.0]);
        assert_eq!(tracker.selected_id(), Some(7));
    }

    #[test]
    fn reselecting_same_object_does_not_animate_again() {
        let mut vm = view_model();
        let mut tracker = SelectionTracker::new();
        let mut scheduler = CountingScheduler::default();

        tracker.select(&mut vm, &mut scheduler, selection(7));
        tracker.select(&mut vm, &mut scheduler, selection(7));
        tracker.select(&mut vm, &mut scheduler, selection(8));

        assert_eq!(scheduler.targets, vec![1.0, 1.0]);
    }

    #[test]
    fn clearing_selection_departs_and_hides() {
        let mut vm = view_model();
        let mut tracker = SelectionTracker::new();
        let mut scheduler = CountingScheduler::default();
        tracker.select(&mut vm, &mut scheduler, selection(3));

        tracker.select(&mut vm, &mut scheduler, None);

        assert!(!vm.is_visible());
        assert!(vm.position().is_some());
        assert_eq!(scheduler.targets, vec![1.0, 1.5]);
        assert!(!tracker.has_selection());

        // Zweites Löschen ohne Selektion animiert nicht
        tracker.select(&mut vm, &mut scheduler, None);
        assert_eq!(scheduler.targets.len(), 2);
    }

    #[test]
    fn move_anchor_requires_selection() {
        let mut vm = view_model();
        let mut tracker = SelectionTracker::new();
        let mut tweens = TweenCollection::new();

        assert!(!tracker.move_anchor(&mut vm, DVec3::ONE));
        assert_eq!(vm.position(), None);

        tracker.select(&mut vm, &mut tweens, selection(1));
        assert!(tracker.move_anchor(&mut vm, DVec3::new(4.0, 5.0, 6.0)));
        assert_eq!(vm.position(), Some(DVec3::new(4.0, 5.0, 6.0)));
    }
}
