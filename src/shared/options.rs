//! Zentrale Konfiguration der Info-Box-Linie.
//!
//! `LineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::TargetAnchor;
use serde::{Deserialize, Serialize};

// ── Linie ───────────────────────────────────────────────────────────

/// Linienstärke in CSS-Pixeln (Element-Höhe).
pub const LINE_THICKNESS_PX: f64 = 5.0;
/// Linienfarbe (RGBA: Rot).
pub const LINE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Platzierung für nicht projizierbare Anker (Element außerhalb der Seite).
pub const OFF_SCREEN_PX: f64 = -1000.0;

// ── Animation ───────────────────────────────────────────────────────

/// Dauer der Appear-/Depart-Animation in Sekunden.
pub const TWEEN_DURATION_SECS: f64 = 0.8;
/// Start-Skalierung beim Erscheinen.
pub const APPEAR_START_SCALE: f64 = 2.0;
/// End-Skalierung beim Erscheinen.
pub const APPEAR_STOP_SCALE: f64 = 1.0;
/// End-Skalierung beim Loslassen der Selektion.
pub const DEPART_STOP_SCALE: f64 = 1.5;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Linien-Optionen.
/// Wird als `infobox_line.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineOptions {
    // ── Linie ───────────────────────────────────────────────────
    /// Linienstärke in Pixeln
    pub line_thickness_px: f64,
    /// Linienfarbe (RGBA), rein kosmetisch
    pub line_color: [f32; 4],
    /// Pixelwert des Off-Screen-Sentinels
    pub off_screen_px: f64,
    /// Berechnung des Zielpunkts an der Info-Box
    #[serde(default)]
    pub target_anchor: TargetAnchor,

    // ── Animation ───────────────────────────────────────────────
    /// Dauer von Appear/Depart in Sekunden
    pub tween_duration_secs: f64,
    /// Skalierung zu Beginn von Appear
    #[serde(default = "default_appear_start_scale")]
    pub appear_start_scale: f64,
    /// Skalierung am Ende von Appear
    #[serde(default = "default_appear_stop_scale")]
    pub appear_stop_scale: f64,
    /// Skalierung am Ende von Depart
    #[serde(default = "default_depart_stop_scale")]
    pub depart_stop_scale: f64,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            line_thickness_px: LINE_THICKNESS_PX,
            line_color: LINE_COLOR,
            off_screen_px: OFF_SCREEN_PX,
            target_anchor: TargetAnchor::default(),

            tween_duration_secs: TWEEN_DURATION_SECS,
            appear_start_scale: APPEAR_START_SCALE,
            appear_stop_scale: APPEAR_STOP_SCALE,
            depart_stop_scale: DEPART_STOP_SCALE,
        }
    }
}

/// Serde-Defaults für Animations-Werte (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_appear_start_scale() -> f64 {
    APPEAR_START_SCALE
}

fn default_appear_stop_scale() -> f64 {
    APPEAR_STOP_SCALE
}

fn default_depart_stop_scale() -> f64 {
    DEPART_STOP_SCALE
}

impl LineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("infobox_line"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("infobox_line.toml")
    }

    /// Linienfarbe als CSS-Hex (`#rrggbb`), Alpha wird ignoriert.
    pub fn line_color_hex(&self) -> String {
        let [r, g, b, _] = self
            .line_color
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Halbe Linienstärke (vertikaler Versatz der Linien-Mitte).
    pub fn half_thickness(&self) -> f64 {
        self.line_thickness_px / 2.0
    }
}
