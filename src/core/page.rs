//! Element-Zugriff der Seite: Rechtecke, Sichtbarkeit, Element-Baum.
//!
//! Die Traits kapseln den Plattformzugriff (Fenster-Scroll-Offset, Bounding-Rects),
//! damit die Linien-Geometrie ohne echtes DOM testbar bleibt.
//! `Page` ist eine In-Memory-Implementierung für Host-Loops und Tests.

use super::{Display, PageRect};
use glam::DVec2;
use std::collections::BTreeMap;
use std::fmt;

/// Handle auf ein Element der Seite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Liefert Bounding-Rechtecke in Seiten-Koordinaten (inkl. Scroll-Offset).
pub trait ElementRectProvider {
    fn rect(&self, element: ElementId) -> PageRect;
}

/// Schaltet die Sichtbarkeit eines Elements.
pub trait ElementDisplay {
    fn set_display(&mut self, element: ElementId, display: Display);
}

/// Vollständiger Host für das Widget: Rechtecke, Sichtbarkeit und Element-Baum.
pub trait ElementHost: ElementRectProvider + ElementDisplay {
    /// Prüft ob das Element im Dokument existiert.
    fn contains(&self, element: ElementId) -> bool;
    /// Erstes Kind-Element (Verbindungsziel innerhalb der Info-Box).
    fn first_child(&self, element: ElementId) -> Option<ElementId>;
    /// Legt ein neues, leeres Element unter `parent` an.
    fn create_element(&mut self, parent: ElementId) -> ElementId;
    /// Entfernt ein Element samt Kindern. `false` wenn es nicht existierte.
    fn remove_element(&mut self, element: ElementId) -> bool;
}

#[derive(Debug, Clone)]
struct PageElement {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// Rechteck relativ zum Viewport (wie `getBoundingClientRect`)
    client_rect: PageRect,
    /// Layout-Größe als Fallback für leere Client-Rects
    offset_size: DVec2,
    display: Display,
}

impl PageElement {
    fn new(parent: Option<ElementId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            client_rect: PageRect::default(),
            offset_size: DVec2::ZERO,
            display: Display::Shown,
        }
    }
}

/// In-Memory-Seite mit Element-Baum und Scroll-Offset.
#[derive(Debug, Clone)]
pub struct Page {
    elements: BTreeMap<ElementId, PageElement>,
    scroll: DVec2,
    next_id: u32,
}

impl Page {
    const BODY: ElementId = ElementId(0);

    /// Erstellt eine leere Seite mit `body`-Element.
    pub fn new() -> Self {
        let mut elements = BTreeMap::new();
        elements.insert(Self::BODY, PageElement::new(None));
        Self {
            elements,
            scroll: DVec2::ZERO,
            next_id: 1,
        }
    }

    /// Wurzel-Element der Seite
    pub fn body(&self) -> ElementId {
        Self::BODY
    }

    /// Fügt ein Element mit Client-Rechteck unter `parent` ein.
    pub fn add_element(&mut self, parent: ElementId, client_rect: PageRect) -> ElementId {
        let id = self.create_element(parent);
        self.set_client_rect(id, client_rect);
        id
    }

    /// Setzt das viewport-relative Rechteck eines Elements.
    pub fn set_client_rect(&mut self, element: ElementId, client_rect: PageRect) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.client_rect = client_rect;
        }
    }

    /// Setzt die Layout-Größe (Fallback wenn das Client-Rect keine Ausdehnung hat).
    pub fn set_offset_size(&mut self, element: ElementId, size: DVec2) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.offset_size = size;
        }
    }

    /// Setzt den Scroll-Offset des Fensters.
    pub fn set_scroll(&mut self, scroll: DVec2) {
        self.scroll = scroll;
    }

    /// Aktueller Scroll-Offset
    pub fn scroll(&self) -> DVec2 {
        self.scroll
    }

    /// Sichtbarkeit eines Elements, `None` wenn es nicht existiert.
    pub fn display(&self, element: ElementId) -> Option<Display> {
        self.elements.get(&element).map(|el| el.display)
    }

    /// Kind-Elemente in Einfüge-Reihenfolge
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.elements
            .get(&element)
            .map(|el| el.children.as_slice())
            .unwrap_or(&[])
    }

    /// Anzahl der Elemente inkl. `body`
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementRectProvider for Page {
    fn rect(&self, element: ElementId) -> PageRect {
        let Some(el) = self.elements.get(&element) else {
            log::debug!("Rect für unbekanntes Element {} angefragt", element);
            return PageRect::default();
        };
        let mut rect = el.client_rect.translated(self.scroll);
        if rect.width == 0.0 {
            rect.width = el.offset_size.x;
        }
        if rect.height == 0.0 {
            rect.height = el.offset_size.y;
        }
        rect
    }
}

impl ElementDisplay for Page {
    fn set_display(&mut self, element: ElementId, display: Display) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.display = display;
        }
    }
}

impl ElementHost for Page {
    fn contains(&self, element: ElementId) -> bool {
        self.elements.contains_key(&element)
    }

    fn first_child(&self, element: ElementId) -> Option<ElementId> {
        self.elements
            .get(&element)
            .and_then(|el| el.children.first().copied())
    }

    fn create_element(&mut self, parent: ElementId) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        let parent = if self.elements.contains_key(&parent) {
            parent
        } else {
            log::warn!(
                "Eltern-Element {} existiert nicht, hänge {} an body",
                parent,
                id
            );
            Self::BODY
        };
        if let Some(p) = self.elements.get_mut(&parent) {
            p.children.push(id);
        }
        self.elements.insert(id, PageElement::new(Some(parent)));
        id
    }

    fn remove_element(&mut self, element: ElementId) -> bool {
        if element == Self::BODY {
            return false;
        }
        let Some(removed) = self.elements.remove(&element) else {
            return false;
        };
        if let Some(parent) = removed.parent.and_then(|p| self.elements.get_mut(&p)) {
            parent.children.retain(|&c| c != element);
        }
        let mut pending = removed.children;
        while let Some(child) = pending.pop() {
            if let Some(el) = self.elements.remove(&child) {
                pending.extend(el.children);
            }
        }
        true
    }
}
