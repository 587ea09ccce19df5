//! View-Model der Info-Box-Linie: Frame-Update und Animations-Trigger.

use super::animation::{AnimationScheduler, Easing, PropertyTween};
use super::geometry::connector_geometry;
use super::state::ConnectorState;
use crate::core::{Display, ElementDisplay, ElementId, ElementRectProvider, Projector};
use crate::shared::LineOptions;
use glam::DVec3;

/// Verknüpft Zustand, Projektor und Optionen mit dem Linien- und dem Ziel-Element.
pub struct InfoBoxLineViewModel {
    state: ConnectorState,
    projector: Box<dyn Projector>,
    options: LineOptions,
    line_element: ElementId,
    target_element: ElementId,
}

impl InfoBoxLineViewModel {
    /// Erstellt ein View-Model für ein bereits angelegtes Linien-Element.
    pub fn new(
        projector: Box<dyn Projector>,
        options: LineOptions,
        line_element: ElementId,
        target_element: ElementId,
    ) -> Self {
        Self {
            state: ConnectorState::new(),
            projector,
            options,
            line_element,
            target_element,
        }
    }

    /// Read-only Sicht auf den aktuellen Zustand
    pub fn state(&self) -> &ConnectorState {
        &self.state
    }

    /// Welt-Position des Objekts, zu dem die Linie zeigt.
    pub fn position(&self) -> Option<DVec3> {
        self.state.anchor_world_position()
    }

    pub fn set_position(&mut self, position: Option<DVec3>) {
        self.state.set_anchor_world_position(position);
    }

    pub fn show_selection(&self) -> bool {
        self.state.show_selection()
    }

    pub fn set_show_selection(&mut self, show: bool) {
        self.state.set_show_selection(show);
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn options(&self) -> &LineOptions {
        &self.options
    }

    /// Ersetzt die Welt → Screen Funktion.
    pub fn set_projector(&mut self, projector: Box<dyn Projector>) {
        self.projector = projector;
    }

    /// Element, das die Linie darstellt
    pub fn line_element(&self) -> ElementId {
        self.line_element
    }

    /// Element, zu dessen Mitte die Linie führt
    pub fn target_element(&self) -> ElementId {
        self.target_element
    }

    /// Gleicht die Linie an Kamera und Selektion an. Einmal pro Render-Frame aufrufen.
    ///
    /// Unsichtbar: nur das Element wird ausgeblendet, alle Felder bleiben stehen.
    /// Nicht projizierbarer Anker: Ursprung wandert auf den Off-Screen-Sentinel,
    /// Länge und Winkel bleiben unverändert.
    pub fn update<H>(&mut self, host: &mut H)
    where
        H: ElementRectProvider + ElementDisplay + ?Sized,
    {
        let position = match self.state.anchor_world_position() {
            Some(position) if self.state.show_selection() => position,
            _ => {
                self.apply_display(host, Display::Hidden);
                return;
            }
        };

        self.apply_display(host, Display::Shown);

        match self.projector.project(position) {
            None => self.state.set_off_screen(),
            Some(screen) => {
                let target = host.rect(self.target_element);
                let geometry = connector_geometry(
                    screen,
                    &target,
                    self.options.target_anchor,
                    self.options.half_thickness(),
                );
                self.state.apply_geometry(&geometry);
            }
        }
    }

    fn apply_display<H>(&mut self, host: &mut H, display: Display)
    where
        H: ElementDisplay + ?Sized,
    {
        if self.state.written_display() != Some(display) {
            log::debug!("Info-Box-Linie {}: display -> {}", self.line_element, display.css());
            host.set_display(self.line_element, display);
            self.state.set_display(display);
        }
    }

    /// Animiert die Linie, um Aufmerksamkeit auf die Selektion zu lenken.
    pub fn animate_appear(&self, scheduler: &mut dyn AnimationScheduler) {
        scheduler.add_property_tween(self.scale_tween(
            self.options.appear_start_scale,
            self.options.appear_stop_scale,
        ));
    }

    /// Animiert die Linie beim Loslassen der Selektion (ab aktueller Skalierung).
    pub fn animate_depart(&self, scheduler: &mut dyn AnimationScheduler) {
        scheduler.add_property_tween(
            self.scale_tween(self.state.scale_factor(), self.options.depart_stop_scale),
        );
    }

    fn scale_tween(&self, from: f64, to: f64) -> PropertyTween {
        PropertyTween {
            target: self.state.scale_handle(),
            field: "scale_factor",
            from,
            to,
            duration_secs: self.options.tween_duration_secs,
            easing: Easing::ExponentialOut,
        }
    }
}

impl std::fmt::Debug for InfoBoxLineViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfoBoxLineViewModel")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("line_element", &self.line_element)
            .field("target_element", &self.target_element)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::animation::TweenCollection;
    use crate::core::{Distance, ElementHost, Page, PageRect, ScreenPoint, TargetAnchor};
    use approx::assert_relative_eq;
    use glam::DVec2;

    /// Nimmt Tweens nur auf, ohne sie auszuführen.
    #[derive(Default)]
    struct RecordingScheduler {
        tweens: Vec<PropertyTween>,
    }

    impl AnimationScheduler for RecordingScheduler {
        fn add_property_tween(&mut self, tween: PropertyTween) {
            self.tweens.push(tween);
        }
    }

    struct Fixture {
        page: Page,
        view_model: InfoBoxLineViewModel,
    }

    fn fixture_with(projector: Box<dyn Projector>, options: LineOptions) -> Fixture {
        let mut page = Page::new();
        let body = page.body();
        let info_box = page.add_element(body, PageRect::new(300.0, 50.0, 40.0, 20.0));
        let line = page.create_element(body);
        let view_model = InfoBoxLineViewModel::new(projector, options, line, info_box);
        Fixture { page, view_model }
    }

    fn fixture() -> Fixture {
        fixture_with(
            Box::new(|_: DVec3| Some(DVec2::new(100.0, 200.0))),
            LineOptions::default(),
        )
    }

    fn select(view_model: &mut InfoBoxLineViewModel) {
        view_model.set_position(Some(DVec3::new(10.0, 20.0, 0.0)));
        view_model.set_show_selection(true);
    }

    #[test]
    fn update_computes_line_for_projected_anchor() {
        let Fixture {
            mut page,
            mut view_model,
        } = fixture();
        select(&mut view_model);

        view_model.update(&mut page);

        let state = view_model.state();
        let length = (220.0_f64 * 220.0 + 125.0 * 125.0).sqrt();
        assert_eq!(state.length(), Distance::Px(length));
        assert_eq!(state.screen_origin_x(), Distance::Px(210.0 - length / 2.0));
        assert_eq!(state.screen_origin_y(), Distance::Px(137.5 - 2.5));
        assert_relative_eq!(
            state.rotation().degrees(),
            125.0_f64.atan2(-220.0).to_degrees()
        );
        assert_eq!(state.display(), Display::Shown);
        assert_eq!(page.display(view_model.line_element()), Some(Display::Shown));
    }

    #[test]
    fn update_hides_element_without_selection_and_keeps_fields() {
        let Fixture {
            mut page,
            mut view_model,
        } = fixture();
        select(&mut view_model);
        view_model.update(&mut page);
        let before = view_model.state().clone();

        view_model.set_show_selection(false);
        view_model.update(&mut page);

        let after = view_model.state();
        assert!(!after.is_visible());
        assert_eq!(after.display(), Display::Hidden);
        assert_eq!(after.screen_origin_x(), before.screen_origin_x());
        assert_eq!(after.screen_origin_y(), before.screen_origin_y());
        assert_eq!(after.length(), before.length());
        assert_eq!(page.display(view_model.line_element()), Some(Display::Hidden));
    }

    #[test]
    fn update_hides_element_without_position() {
        let Fixture {
            mut page,
            mut view_model,
        } = fixture();
        view_model.set_show_selection(true);

        view_model.update(&mut page);

        assert!(!view_model.is_visible());
        assert_eq!(page.display(view_model.line_element()), Some(Display::Hidden));
        assert!(view_model.state().screen_origin_x().is_off_screen());
    }

    #[test]
    fn first_update_hides_initially_shown_element() {
        let Fixture {
            mut page,
            mut view_model,
        } = fixture();
        assert_eq!(page.display(view_model.line_element()), Some(Display::Shown));

        view_model.update(&mut page);

        assert!(!view_model.is_visible());
        assert_eq!(page.display(view_model.line_element()), Some(Display::Hidden));
    }

    #[test]
    fn line_thickness_option_shifts_vertical_origin() {
        let mut options = LineOptions::default();
        options.line_thickness_px = 10.0;
        let Fixture {
            mut page,
            mut view_model,
        } = fixture_with(
            Box::new(|_: DVec3| Some(DVec2::new(100.0, 200.0))),
            options,
        );
        select(&mut view_model);

        view_model.update(&mut page);

        assert_eq!(view_model.state().screen_origin_y(), Distance::Px(137.5 - 5.0));
    }

    #[test]
    fn unprojectable_anchor_moves_line_off_screen() {
        let Fixture {
            mut page,
            mut view_model,
        } = fixture();
        select(&mut view_model);
        view_model.update(&mut page);
        let length = view_model.state().length();
        let rotation = view_model.state().rotation();

        view_model.set_projector(Box::new(|_: DVec3| None::<ScreenPoint>));
        view_model.update(&mut page);

        let state = view_model.state();
        assert!(state.screen_origin_x().is_off_screen());
        assert!(state.screen_origin_y().is_off_screen());
        assert_eq!(state.length(), length);
        assert_eq!(state.rotation(), rotation);
        // Element bleibt eingeblendet, liegt nur außerhalb der Seite
        assert_eq!(page.display(view_model.line_element()), Some(Display::Shown));
    }

    #[test]
    fn update_is_idempotent() {
        let Fixture {
            mut page,
            mut view_model,
        } = fixture();
        select(&mut view_model);

        view_model.update(&mut page);
        let first = view_model.state().clone();
        view_model.update(&mut page);

        assert_eq!(view_model.state(), &first);
    }

    #[test]
    fn center_anchor_option_changes_target_point() {
        let mut options = LineOptions::default();
        options.target_anchor = TargetAnchor::Center;
        let Fixture {
            mut page,
            mut view_model,
        } = fixture_with(
            Box::new(|_: DVec3| Some(DVec2::new(100.0, 200.0))),
            options,
        );
        select(&mut view_model);

        view_model.update(&mut page);

        let length = (220.0_f64 * 220.0 + 140.0 * 140.0).sqrt();
        assert_eq!(view_model.state().length(), Distance::Px(length));
    }

    #[test]
    fn target_rect_follows_page_scroll() {
        let Fixture {
            mut page,
            mut view_model,
        } = fixture();
        select(&mut view_model);
        page.set_scroll(DVec2::new(0.0, 100.0));

        view_model.update(&mut page);

        // top = 150 → y2 = 150 + 75 = 225
        let length = (220.0_f64 * 220.0 + 25.0 * 25.0).sqrt();
        assert_eq!(view_model.state().length(), Distance::Px(length));
    }

    #[test]
    fn animate_appear_enqueues_scale_tween() {
        let Fixture { view_model, .. } = fixture();
        let mut scheduler = RecordingScheduler::default();

        view_model.animate_appear(&mut scheduler);

        let tween = &scheduler.tweens[0];
        assert_eq!(tween.field, "scale_factor");
        assert_eq!(tween.from, 2.0);
        assert_eq!(tween.to, 1.0);
        assert_eq!(tween.duration_secs, 0.8);
        assert_eq!(tween.easing, Easing::ExponentialOut);
        assert!(tween.target.same_target(&view_model.state().scale_handle()));
    }

    #[test]
    fn animate_depart_starts_from_current_scale() {
        let Fixture { view_model, .. } = fixture();
        view_model.state().scale_handle().set(1.3);
        let mut scheduler = RecordingScheduler::default();

        view_model.animate_depart(&mut scheduler);

        let tween = &scheduler.tweens[0];
        assert_eq!(tween.from, 1.3);
        assert_eq!(tween.to, 1.5);
    }

    #[test]
    fn appear_settles_at_one_after_tween_completion() {
        let Fixture { view_model, .. } = fixture();
        let mut tweens = TweenCollection::new();

        view_model.animate_appear(&mut tweens);
        tweens.update(0.0);
        assert_eq!(view_model.state().scale_factor(), 2.0);
        tweens.update(1.0);

        assert_eq!(view_model.state().scale_factor(), 1.0);
    }
}
