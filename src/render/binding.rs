//! Compute-then-diff Bindung: pro Frame Snapshot bilden, Änderungen melden.

use super::style::{StyleChange, StyleSnapshot};
use crate::app::ConnectorState;
use crate::shared::LineOptions;
use std::fmt;

/// Callback für geänderte Attribute.
pub type StyleObserver = Box<dyn FnMut(&StyleChange)>;

/// Handle einer Observer-Registrierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Hält den zuletzt gerenderten Snapshot und verteilt Änderungen an Observer.
#[derive(Default)]
pub struct StyleBinding {
    last: Option<StyleSnapshot>,
    observers: Vec<(SubscriptionId, StyleObserver)>,
    next_id: u64,
}

impl StyleBinding {
    /// Erstellt eine Bindung ohne Vorgänger-Snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Observer für alle künftigen Änderungen.
    pub fn subscribe(&mut self, observer: StyleObserver) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Entfernt einen Observer. `false` wenn die ID unbekannt ist.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Anzahl registrierter Observer
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Zuletzt synchronisierter Snapshot
    pub fn last_snapshot(&self) -> Option<&StyleSnapshot> {
        self.last.as_ref()
    }

    /// Verwirft den letzten Snapshot; der nächste `sync` meldet wieder alle Attribute.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Bildet den Snapshot, meldet die Differenz an alle Observer und gibt sie zurück.
    pub fn sync(&mut self, state: &ConnectorState, options: &LineOptions) -> Vec<StyleChange> {
        let snapshot = StyleSnapshot::from_state(state, options);
        let changes = snapshot.diff(self.last.as_ref());

        for change in &changes {
            for (_, observer) in &mut self.observers {
                observer(change);
            }
        }

        self.last = Some(snapshot);
        changes
    }
}

impl fmt::Debug for StyleBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleBinding")
            .field("last", &self.last)
            .field("observers", &self.observers.len())
            .finish()
    }
}
