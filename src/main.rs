//! InfoBox-Line Demo.
//!
//! Simuliert einen Render-Loop: eine Kamera umkreist ein selektiertes Objekt,
//! die Linie zur Info-Box folgt Frame für Frame. Geänderte Style-Attribute
//! werden geloggt (`RUST_LOG=debug` zeigt zusätzlich Sichtbarkeits- und Tween-Wechsel).

use glam::DVec3;
use infobox_line::render::static_line_styles;
use infobox_line::{
    Camera3D, ElementHost, InfoBoxLine, LineOptions, Page, PageRect, Selection, SelectionTracker,
    StyleChange, TweenCollection,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Simulierte Frame-Rate
const FRAME_RATE: f64 = 60.0;
/// Anzahl simulierter Frames
const FRAME_COUNT: u32 = 180;
/// Frame, in dem die Selektion aufgehoben wird
const DESELECT_FRAME: u32 = 150;
/// Kamera-Drehung pro Frame (Radiant)
const ORBIT_STEP: f64 = 0.02;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("InfoBox-Line Demo v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = LineOptions::load_from_file(&LineOptions::config_path());
        let mut demo = Demo::new(options)?;
        demo.run();
        demo.shutdown();
        Ok(())
    }
}

/// Seite mit Canvas und Info-Box, Kamera, Widget und Scheduler
struct Demo {
    page: Page,
    camera: Rc<RefCell<Camera3D>>,
    widget: InfoBoxLine,
    tracker: SelectionTracker,
    tweens: TweenCollection,
}

impl Demo {
    fn new(options: LineOptions) -> anyhow::Result<Self> {
        let mut page = Page::new();
        let body = page.body();
        let canvas_rect = PageRect::new(0.0, 0.0, 1280.0, 720.0);
        page.add_element(body, canvas_rect);
        let info_box = page.add_element(body, PageRect::new(960.0, 40.0, 300.0, 400.0));
        page.add_element(info_box, PageRect::new(970.0, 50.0, 280.0, 32.0));

        for (name, value) in static_line_styles(&options) {
            log::debug!("Linien-Style {}: {}", name, value);
        }

        let camera = Rc::new(RefCell::new(Camera3D::new(canvas_rect)));
        let projector_camera = Rc::clone(&camera);
        let mut widget = InfoBoxLine::builder()
            .container(body)
            .connecting_element(info_box)
            .projector(Box::new(move |world: DVec3| {
                projector_camera.borrow().world_to_screen(world)
            }))
            .options(options)
            .build(&mut page)?;

        widget.subscribe(Box::new(|change: &StyleChange| {
            log::debug!("  {} = {}", change.property, change.value);
        }));

        Ok(Self {
            page,
            camera,
            widget,
            tracker: SelectionTracker::new(),
            tweens: TweenCollection::new(),
        })
    }

    fn run(&mut self) {
        let object = Selection {
            id: 1,
            position: DVec3::new(2.0, 1.0, 0.0),
        };

        for frame in 0..FRAME_COUNT {
            let time = f64::from(frame) / FRAME_RATE;

            if frame == 0 {
                self.tracker
                    .select(self.widget.view_model_mut(), &mut self.tweens, Some(object));
            } else if frame == DESELECT_FRAME {
                self.tracker
                    .select(self.widget.view_model_mut(), &mut self.tweens, None);
            }

            self.camera.borrow_mut().orbit(ORBIT_STEP);
            self.tweens.update(time);

            let changes = self.widget.render_frame(&mut self.page);
            if !changes.is_empty() {
                log::info!("Frame {:3}: {}", frame, summarize(&changes));
            }
        }
    }

    fn shutdown(self) {
        let line = self.widget.line_element();
        let mut page = self.page;
        self.widget.destroy(&mut page);
        log::info!(
            "Demo beendet, Linien-Element {} entfernt: {}",
            line,
            !page.contains(line)
        );
    }
}

fn summarize(changes: &[StyleChange]) -> String {
    changes
        .iter()
        .map(|c| format!("{}={}", c.property, c.value))
        .collect::<Vec<_>>()
        .join(", ")
}
