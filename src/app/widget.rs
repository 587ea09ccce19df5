//! Widget für eine Linie zwischen selektiertem Objekt und Info-Box.

use super::view_model::InfoBoxLineViewModel;
use crate::core::{Display, ElementHost, ElementId, Projector};
use crate::render::{StyleBinding, StyleChange, StyleObserver, SubscriptionId};
use crate::shared::LineOptions;

/// Besitzt das Linien-Element, das View-Model und die Style-Bindung.
///
/// `destroy` konsumiert das Widget; ein zerstörtes Widget ist nicht mehr nutzbar.
#[derive(Debug)]
pub struct InfoBoxLine {
    container: ElementId,
    connecting_element: ElementId,
    view_model: InfoBoxLineViewModel,
    binding: StyleBinding,
}

impl InfoBoxLine {
    /// Startet den Builder.
    pub fn builder() -> InfoBoxLineBuilder {
        InfoBoxLineBuilder::default()
    }

    /// Eltern-Container des Linien-Elements
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// Info-Box, zu der verbunden wird
    pub fn connecting_element(&self) -> ElementId {
        self.connecting_element
    }

    pub fn line_element(&self) -> ElementId {
        self.view_model.line_element()
    }

    pub fn view_model(&self) -> &InfoBoxLineViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut InfoBoxLineViewModel {
        &mut self.view_model
    }

    /// Ersetzt die Welt → Screen Funktion des View-Models.
    pub fn set_projector(&mut self, projector: Box<dyn Projector>) {
        self.view_model.set_projector(projector);
    }

    /// Registriert einen Observer für Style-Änderungen.
    pub fn subscribe(&mut self, observer: StyleObserver) -> SubscriptionId {
        self.binding.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.binding.unsubscribe(id)
    }

    /// Ein Render-Frame: Geometrie aktualisieren, dann geänderte Attribute melden.
    pub fn render_frame<H: ElementHost + ?Sized>(&mut self, host: &mut H) -> Vec<StyleChange> {
        self.view_model.update(host);
        self.binding
            .sync(self.view_model.state(), self.view_model.options())
    }

    /// Entfernt das Linien-Element aus dem Container.
    pub fn destroy<H: ElementHost + ?Sized>(self, host: &mut H) {
        let line = self.view_model.line_element();
        if !host.remove_element(line) {
            log::warn!("Linien-Element {} war bereits entfernt", line);
        }
        log::info!("Info-Box-Linie {} zerstört", line);
    }
}

/// Sammelt die Pflicht-Abhängigkeiten des Widgets.
#[derive(Default)]
pub struct InfoBoxLineBuilder {
    container: Option<ElementId>,
    connecting_element: Option<ElementId>,
    projector: Option<Box<dyn Projector>>,
    options: LineOptions,
}

impl InfoBoxLineBuilder {
    /// Element, in das die Linie eingehängt wird.
    pub fn container(mut self, container: ElementId) -> Self {
        self.container = Some(container);
        self
    }

    /// Info-Box; verbunden wird mit deren erstem Kind-Element.
    pub fn connecting_element(mut self, element: ElementId) -> Self {
        self.connecting_element = Some(element);
        self
    }

    pub fn projector(mut self, projector: Box<dyn Projector>) -> Self {
        self.projector = Some(projector);
        self
    }

    pub fn options(mut self, options: LineOptions) -> Self {
        self.options = options;
        self
    }

    /// Legt das Linien-Element an und erstellt das Widget.
    ///
    /// Fehlende Pflicht-Angaben sind Programmierfehler und brechen sofort ab.
    pub fn build<H: ElementHost + ?Sized>(self, host: &mut H) -> anyhow::Result<InfoBoxLine> {
        let Some(container) = self.container else {
            anyhow::bail!("container ist erforderlich");
        };
        let Some(connecting_element) = self.connecting_element else {
            anyhow::bail!("connecting element ist erforderlich");
        };
        let Some(projector) = self.projector else {
            anyhow::bail!("projector ist erforderlich");
        };
        if !host.contains(container) {
            anyhow::bail!("Element {} existiert nicht im Dokument", container);
        }
        if !host.contains(connecting_element) {
            anyhow::bail!("Element {} existiert nicht im Dokument", connecting_element);
        }
        let target = host.first_child(connecting_element).ok_or_else(|| {
            anyhow::anyhow!(
                "Verbindungs-Element {} hat kein Kind-Element",
                connecting_element
            )
        })?;

        let line = host.create_element(container);
        host.set_display(line, Display::Hidden);
        log::info!(
            "Info-Box-Linie {} angelegt (Container {}, Ziel {})",
            line,
            container,
            target
        );

        Ok(InfoBoxLine {
            container,
            connecting_element,
            view_model: InfoBoxLineViewModel::new(projector, self.options, line, target),
            binding: StyleBinding::new(),
        })
    }
}
